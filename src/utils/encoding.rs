//! Text encoding detection and conversion
//!
//! Chapter files come from all over: PotPlayer writes UTF-16, old OGM
//! files are often in a legacy code page. Input is decoded by BOM, then
//! UTF-8 validation, then statistical detection. Output charsets follow the
//! usual labels plus `utf-8-sig` for UTF-8 with a byte order mark.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::{ConverterError, ConverterResult};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Decode raw bytes of unknown encoding.
///
/// Returns the text without any byte order mark and the name of the
/// encoding that was used.
pub fn decode_auto(raw: &[u8]) -> (String, &'static str) {
    let encoding = if let Some((encoding, _)) = Encoding::for_bom(raw) {
        encoding
    } else if std::str::from_utf8(raw).is_ok() {
        UTF_8
    } else {
        let mut detector = EncodingDetector::new();
        detector.feed(raw, true);
        detector.guess(None, true)
    };

    let (text, _) = encoding.decode_with_bom_removal(raw);
    (text.into_owned(), encoding.name())
}

/// Output charset resolved from a user-supplied label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// UTF-8, optionally preceded by a BOM
    Utf8 { bom: bool },
    /// UTF-16, optionally preceded by a BOM
    Utf16 { big_endian: bool, bom: bool },
    /// Any other encoding known to `encoding_rs`
    Other(&'static Encoding),
}

impl Charset {
    /// Resolve a charset label such as `utf-8-sig`, `utf-16le` or `gbk`
    pub fn from_label(label: &str) -> ConverterResult<Self> {
        let normalized = label.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8-sig" | "utf8-sig" => return Ok(Charset::Utf8 { bom: true }),
            "utf-16" | "utf16" => {
                return Ok(Charset::Utf16 {
                    big_endian: false,
                    bom: true,
                })
            }
            _ => {}
        }

        let encoding = Encoding::for_label(normalized.as_bytes()).ok_or_else(|| {
            ConverterError::Encoding {
                message: format!("unknown charset '{}'", label),
            }
        })?;

        Ok(if encoding == UTF_8 {
            Charset::Utf8 { bom: false }
        } else if encoding == UTF_16LE {
            Charset::Utf16 {
                big_endian: false,
                bom: false,
            }
        } else if encoding == UTF_16BE {
            Charset::Utf16 {
                big_endian: true,
                bom: false,
            }
        } else {
            Charset::Other(encoding)
        })
    }

    /// Encode text, failing if a character has no representation
    pub fn encode(&self, text: &str) -> ConverterResult<Vec<u8>> {
        match *self {
            Charset::Utf8 { bom } => {
                let mut bytes = Vec::with_capacity(text.len() + 3);
                if bom {
                    bytes.extend_from_slice(UTF8_BOM);
                }
                bytes.extend_from_slice(text.as_bytes());
                Ok(bytes)
            }
            Charset::Utf16 { big_endian, bom } => {
                let mut bytes = Vec::with_capacity(text.len() * 2 + 2);
                if bom {
                    bytes.extend_from_slice(if big_endian { UTF16BE_BOM } else { UTF16LE_BOM });
                }
                for unit in text.encode_utf16() {
                    let pair = if big_endian {
                        unit.to_be_bytes()
                    } else {
                        unit.to_le_bytes()
                    };
                    bytes.extend_from_slice(&pair);
                }
                Ok(bytes)
            }
            Charset::Other(encoding) => {
                let (bytes, _, had_errors) = encoding.encode(text);
                if had_errors {
                    return Err(ConverterError::Encoding {
                        message: format!("text cannot be represented in {}", encoding.name()),
                    });
                }
                Ok(bytes.into_owned())
            }
        }
    }
}
