//! Configuration initialization and hierarchy management

use std::path::PathBuf;

use crate::adapters::mkvtoolnix::ToolPaths;
use crate::adapters::toml_config::FileConfig;
use crate::app::convert_interactor::ConvertRequest;
use crate::cli::Cli;
use crate::domain::model::OutputFormat;
use crate::error::ConverterResult;
use crate::formats::LinePolicy;
use crate::utils::encoding::Charset;
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

pub const DEFAULT_CHARSET: &str = "utf-8-sig";
pub const DEFAULT_MP4_CHARSET: &str = "utf-8";

/// Effective settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub clipboard: bool,
    pub mp4_charset: String,
    pub charset: Charset,
    pub language: Option<String>,
    pub overwrite: bool,
    pub tools: ToolPaths,
    pub logging: LoggingConfig,
}

/// Initialize settings following precedence: CLI > Env > File > Defaults.
///
/// Environment variables are bound to their flags by clap, so they arrive
/// here already merged with the command line.
pub fn initialize_settings(cli: &Cli) -> ConverterResult<Settings> {
    let file = FileConfig::discover(cli.config.as_deref())?;
    Settings::merge(cli, file)
}

impl Settings {
    /// Layer command-line values over a loaded config file
    pub fn merge(cli: &Cli, file: FileConfig) -> ConverterResult<Self> {
        let FileConfig { converter, tools } = file;
        let args = &cli.convert;

        let format = match args.format.as_deref() {
            Some(format) => Some(OutputFormat::parse(format)?),
            None => converter.format,
        };

        let charset_label = args
            .charset
            .clone()
            .or(converter.charset)
            .unwrap_or_else(|| DEFAULT_CHARSET.to_string());
        let charset = Charset::from_label(&charset_label)?;

        let mp4_charset = args
            .mp4_charset
            .clone()
            .or(converter.mp4_charset)
            .unwrap_or_else(|| DEFAULT_MP4_CHARSET.to_string());

        let level = match cli.log_level.as_deref() {
            Some(level) => LogLevel::parse(level)?,
            None => converter.log_level.unwrap_or_default(),
        };
        let log_format = match cli.log_format.as_deref() {
            Some(format) => LogFormat::parse(format)?,
            None => converter.log_format.unwrap_or_default(),
        };

        Ok(Self {
            input: args.filename.clone(),
            output: args.output.clone(),
            format,
            clipboard: args.clipboard || converter.clipboard.unwrap_or(false),
            mp4_charset,
            charset,
            language: args
                .lang
                .clone()
                .or(converter.lang)
                .filter(|lang| !lang.is_empty()),
            overwrite: args.overwrite || converter.overwrite.unwrap_or(false),
            tools: ToolPaths {
                mkvmerge: tools.mkvmerge,
                mkvextract: tools.mkvextract,
            },
            logging: LoggingConfig {
                level,
                format: log_format,
            },
        })
    }

    /// Conversion request for these settings
    pub fn convert_request(&self) -> ConvertRequest {
        ConvertRequest {
            input: self.input.clone(),
            output: self.output.clone(),
            format: self.format,
            clipboard: self.clipboard,
            mp4_charset: self.mp4_charset.clone(),
            charset: self.charset,
            language: self.language.clone(),
            overwrite: self.overwrite,
            line_policy: LinePolicy::SkipNonMatching,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConverterError;
    use clap::Parser;
    use std::path::Path;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["chapter-converter"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn file_config(toml: &str) -> FileConfig {
        FileConfig::from_toml(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::merge(&cli(&["in.txt"]), FileConfig::default()).unwrap();
        assert_eq!(settings.input, Some(PathBuf::from("in.txt")));
        assert_eq!(settings.format, None);
        assert_eq!(settings.charset, Charset::Utf8 { bom: true });
        assert_eq!(settings.mp4_charset, "utf-8");
        assert!(!settings.clipboard);
        assert!(!settings.overwrite);
        assert_eq!(settings.logging, LoggingConfig::default());
    }

    #[test]
    fn test_file_values_apply_when_cli_is_silent() {
        let file = file_config(
            "[converter]\nformat = \"ogm\"\ncharset = \"utf-8\"\nlang = \"ja\"\nclipboard = true\n\
             log_level = \"debug\"\n[tools]\nmkvextract = \"/opt/mkvextract\"\n",
        );
        let settings = Settings::merge(&cli(&[]), file).unwrap();
        assert_eq!(settings.format, Some(OutputFormat::Ogm));
        assert_eq!(settings.charset, Charset::Utf8 { bom: false });
        assert_eq!(settings.language.as_deref(), Some("ja"));
        assert!(settings.clipboard);
        assert_eq!(settings.logging.level, LogLevel::Debug);
        assert_eq!(
            settings.tools.mkvextract,
            Some(PathBuf::from("/opt/mkvextract"))
        );
    }

    #[test]
    fn test_cli_beats_file() {
        let file = file_config("[converter]\nformat = \"ogm\"\nlang = \"ja\"\n");
        let settings = Settings::merge(
            &cli(&["-f", "xml", "--lang", "en", "--log-level", "info"]),
            file,
        )
        .unwrap();
        assert_eq!(settings.format, Some(OutputFormat::Xml));
        assert_eq!(settings.language.as_deref(), Some("en"));
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_unknown_charset_is_rejected() {
        let err = Settings::merge(&cli(&["--charset", "klingon"]), FileConfig::default())
            .unwrap_err();
        assert!(matches!(err, ConverterError::Encoding { .. }));
    }

    #[test]
    fn test_request_mirrors_settings() {
        let settings = Settings::merge(
            &cli(&["in.txt", "-o", "out.pbf", "-y", "--mp4-charset", "gbk"]),
            FileConfig::default(),
        )
        .unwrap();
        let request = settings.convert_request();
        assert_eq!(request.output, Some(PathBuf::from("out.pbf")));
        assert!(request.overwrite);
        assert_eq!(request.mp4_charset, "gbk");
        assert_eq!(request.line_policy, LinePolicy::SkipNonMatching);
    }
}
