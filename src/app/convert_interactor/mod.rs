// Convert interactor - Orchestrates the chapter conversion use case

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::model::*;
use crate::domain::rules::*;
use crate::error::{ConverterError, ConverterResult};
use crate::formats::{self, LinePolicy};
use crate::ports::*;
use crate::utils::encoding::Charset;
use crate::utils::path::{avoid_collision, default_output_path, lower_extension};

/// Conversion request
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest {
    /// Input file; `None` reads the clipboard when `clipboard` is set
    pub input: Option<PathBuf>,
    /// Output file; `None` derives one from the input or uses the clipboard
    pub output: Option<PathBuf>,
    /// Forced output format
    pub format: Option<OutputFormat>,
    /// Clipboard mode
    pub clipboard: bool,
    /// Chapter charset passed to the tools for MP4/MKV input
    pub mp4_charset: String,
    /// Charset of text output files
    pub charset: Charset,
    /// Chapter language for XML output
    pub language: Option<String>,
    /// Replace existing output files instead of picking a free name
    pub overwrite: bool,
    pub line_policy: LinePolicy,
}

impl Default for ConvertRequest {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            format: None,
            clipboard: false,
            mp4_charset: "utf-8".to_string(),
            charset: Charset::Utf8 { bom: true },
            language: None,
            overwrite: false,
            line_policy: LinePolicy::default(),
        }
    }
}

impl ConvertRequest {
    /// Request that reads `input` and writes next to it
    pub fn for_file(input: impl Into<PathBuf>) -> Self {
        Self {
            input: Some(input.into()),
            ..Self::default()
        }
    }

    /// Clipboard round trip request
    pub fn for_clipboard() -> Self {
        Self {
            clipboard: true,
            ..Self::default()
        }
    }
}

/// Where the converted chapters went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Clipboard,
    File(PathBuf),
}

/// Outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub source: InputSource,
    /// Raw clipboard text, when the input came from the clipboard
    pub clipboard_input: Option<String>,
    pub dialect: Dialect,
    pub format: OutputFormat,
    pub chapters: ChapterList,
    pub language: LanguageChoice,
    pub destination: Destination,
    /// Text that was emitted; for XML written to a file this is the OGM
    /// text handed to the container tools
    pub output_text: String,
}

/// Input text and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredInput {
    pub source: InputSource,
    pub text: String,
}

impl AcquiredInput {
    /// Raw text, when it was read from the clipboard
    pub fn clipboard_text(&self) -> Option<&str> {
        match self.source {
            InputSource::Clipboard => Some(&self.text),
            _ => None,
        }
    }
}

/// Conversion pipeline stages, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    AcquireInput,
    DetectFormat,
    Parse,
    ResolveOutputFormat,
    Render,
    Emit,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::AcquireInput => "acquire-input",
            PipelineStage::DetectFormat => "detect-format",
            PipelineStage::Parse => "parse",
            PipelineStage::ResolveOutputFormat => "resolve-output-format",
            PipelineStage::Render => "render",
            PipelineStage::Emit => "emit",
        };
        write!(f, "{}", name)
    }
}

fn enter(stage: PipelineStage) {
    debug!(%stage, "Entering pipeline stage");
}

/// Interactor for the conversion use case
pub struct ConvertInteractor {
    clipboard_port: Arc<dyn ClipboardPort>,
    container_port: Arc<dyn ContainerToolPort>,
    fs_port: Arc<dyn FsPort>,
}

impl ConvertInteractor {
    /// Create new convert interactor with injected ports
    pub fn new(
        clipboard_port: Arc<dyn ClipboardPort>,
        container_port: Arc<dyn ContainerToolPort>,
        fs_port: Arc<dyn FsPort>,
    ) -> Self {
        Self {
            clipboard_port,
            container_port,
            fs_port,
        }
    }

    /// Run the whole pipeline. Nothing is written unless every stage before
    /// `Emit` succeeded.
    pub fn execute(&self, request: &ConvertRequest) -> ConverterResult<ConvertReport> {
        let input = self.acquire_input(request)?;
        self.convert(request, input)
    }

    /// Run the stages after `AcquireInput` on input already read
    pub fn convert(
        &self,
        request: &ConvertRequest,
        input: AcquiredInput,
    ) -> ConverterResult<ConvertReport> {
        let clipboard_input = input.clipboard_text().map(str::to_string);
        let AcquiredInput { source, text } = input;

        enter(PipelineStage::DetectFormat);
        let lines = formats::normalize_lines(&text);
        let detection = formats::detect(&lines)?;
        info!(
            "Detected {} input (rule: {})",
            detection.dialect, detection.rule
        );

        enter(PipelineStage::Parse);
        let parsed = formats::parse(
            detection.dialect,
            detection.body(&lines),
            request.line_policy,
        )?;
        info!("Parsed {} chapters", parsed.chapters.len());

        enter(PipelineStage::ResolveOutputFormat);
        let format = resolve_output_format(
            request.format,
            request.clipboard,
            request.output.as_deref(),
        );
        let language = match format {
            OutputFormat::Xml => {
                select_language(request.language.as_deref(), parsed.languages.as_ref())
            }
            _ => LanguageChoice::None,
        };
        if let LanguageChoice::FirstOfMany { chosen, all } = &language {
            warn!(
                "Chapters carry several languages ({}); tagging all of them '{}'",
                all.join(", "),
                chosen
            );
        }
        debug!(%format, ?language, "Output resolved");

        enter(PipelineStage::Render);
        let rendered = formats::render(format, &parsed.chapters)?;

        enter(PipelineStage::Emit);
        let (destination, output_text) =
            self.emit(request, &source, format, rendered, language.tag())?;

        Ok(ConvertReport {
            source,
            clipboard_input,
            dialect: detection.dialect,
            format,
            chapters: parsed.chapters,
            language,
            destination,
            output_text,
        })
    }

    /// `AcquireInput` stage: read the input file, falling back to the
    /// clipboard in clipboard mode
    pub fn acquire_input(&self, request: &ConvertRequest) -> ConverterResult<AcquiredInput> {
        enter(PipelineStage::AcquireInput);
        if let Some(path) = request.input.as_deref() {
            if self.fs_port.file_exists(path) {
                return self.read_input_file(path, request);
            }
            if !request.clipboard {
                return Err(ConverterError::NoInput {
                    reason: format!("{} is not a readable file", path.display()),
                });
            }
            warn!("{} not found, reading the clipboard instead", path.display());
        } else if !request.clipboard {
            return Err(ConverterError::NoInput {
                reason: "no input file given and clipboard mode is off".to_string(),
            });
        }

        match self.clipboard_port.read_text()? {
            Some(text) if !text.is_empty() => Ok(AcquiredInput {
                source: InputSource::Clipboard,
                text,
            }),
            _ => Err(ConverterError::NoInput {
                reason: "no valid input data in the clipboard".to_string(),
            }),
        }
    }

    fn read_input_file(
        &self,
        path: &Path,
        request: &ConvertRequest,
    ) -> ConverterResult<AcquiredInput> {
        let source = InputSource::Container(path.to_path_buf());
        match lower_extension(path).as_deref() {
            Some("xml") => {
                info!("Extracting chapters from {}", path.display());
                let text = self.container_port.extract_chapters(path, None)?;
                Ok(AcquiredInput { source, text })
            }
            Some("mp4") | Some("mkv") => {
                info!(
                    "Extracting chapters from {} (charset {})",
                    path.display(),
                    request.mp4_charset
                );
                let text = self
                    .container_port
                    .extract_chapters(path, Some(&request.mp4_charset))?;
                Ok(AcquiredInput { source, text })
            }
            _ => Ok(AcquiredInput {
                source: InputSource::TextFile(path.to_path_buf()),
                text: self.fs_port.read_text(path)?,
            }),
        }
    }

    fn emit(
        &self,
        request: &ConvertRequest,
        source: &InputSource,
        format: OutputFormat,
        rendered: String,
        language: Option<&str>,
    ) -> ConverterResult<(Destination, String)> {
        if request.clipboard && request.output.is_none() {
            let text = match format {
                OutputFormat::Xml => self.xml_text(&rendered, language)?,
                _ => rendered,
            };
            self.clipboard_port.write_text(&text)?;
            info!("Placed {} chapters on the clipboard", format);
            return Ok((Destination::Clipboard, text));
        }

        let target = match (&request.output, source.path()) {
            (Some(output), _) => output.clone(),
            (None, Some(input)) => default_output_path(input, format),
            (None, None) => {
                return Err(ConverterError::NoInput {
                    reason: "no input file to derive an output path from".to_string(),
                })
            }
        };
        let target = if request.overwrite {
            target
        } else {
            avoid_collision(&target, |path| self.fs_port.file_exists(path))
        };

        match format {
            OutputFormat::Xml => {
                self.container_port
                    .embed_chapters(&rendered, &target, language)?;
            }
            _ => self.fs_port.write_text(&target, &rendered, request.charset)?,
        }
        info!("Wrote {} chapters to {}", format, target.display());

        Ok((Destination::File(target), rendered))
    }

    /// Chapter XML as text, produced through a scratch file
    fn xml_text(&self, ogm_text: &str, language: Option<&str>) -> ConverterResult<String> {
        let scratch = tempfile::Builder::new()
            .prefix("chapter-converter-")
            .tempdir()?;
        let xml_path = scratch.path().join("chapters.xml");
        self.container_port
            .embed_chapters(ogm_text, &xml_path, language)?;
        self.fs_port.read_text(&xml_path)
    }
}
