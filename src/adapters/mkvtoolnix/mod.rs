//! MKVToolNix container adapter
//!
//! Moves chapters between containers and OGM text with `mkvmerge` and
//! `mkvextract`. Intermediate files live in a private temporary directory
//! that is removed when the call returns, whether it succeeded or not.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{ConverterError, ConverterResult};
use crate::ports::ContainerToolPort;
use crate::utils::encoding::{decode_auto, Charset};

const MKVMERGE: &str = "mkvmerge";
const MKVEXTRACT: &str = "mkvextract";

/// Executable locations, either configured or looked up in `PATH`
#[derive(Debug, Clone, Default)]
pub struct ToolPaths {
    pub mkvmerge: Option<PathBuf>,
    pub mkvextract: Option<PathBuf>,
}

/// `mkvmerge`/`mkvextract` backed container adapter
pub struct MkvToolNixAdapter {
    paths: ToolPaths,
}

impl MkvToolNixAdapter {
    /// Create a new adapter; tools are located on first use
    pub fn new(paths: ToolPaths) -> Self {
        Self { paths }
    }

    fn resolve(&self, name: &str) -> ConverterResult<PathBuf> {
        let configured = match name {
            MKVMERGE => self.paths.mkvmerge.as_deref(),
            MKVEXTRACT => self.paths.mkvextract.as_deref(),
            _ => None,
        };

        if let Some(path) = configured {
            if path.exists() {
                return Ok(path.to_path_buf());
            }
            warn!("Configured {} not found at {}, searching PATH", name, path.display());
        }

        which::which(name).map_err(|_| ConverterError::ToolNotFound {
            tool: name.to_string(),
        })
    }

    fn tool(&self, name: &str) -> ConverterResult<ToolCommand> {
        Ok(ToolCommand::new(name, self.resolve(name)?))
    }

    fn scratch_dir() -> ConverterResult<tempfile::TempDir> {
        Ok(tempfile::Builder::new()
            .prefix("chapter-converter-")
            .tempdir()?)
    }
}

impl ContainerToolPort for MkvToolNixAdapter {
    fn extract_chapters(&self, container: &Path, charset: Option<&str>) -> ConverterResult<String> {
        let scratch = Self::scratch_dir()?;
        let mks = scratch.path().join("chapters.mks");
        let ogm = scratch.path().join("chapters.ogm.txt");

        let is_xml = container
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));

        let mut merge = self.tool(MKVMERGE)?;
        merge.arg("-o").path_arg(&mks);
        if is_xml {
            merge.arg("--chapters").path_arg(container);
        } else {
            merge.args(["-A", "-D"]);
            if let Some(charset) = charset {
                merge.arg("--chapter-charset").arg(charset);
            }
            merge.path_arg(container);
        }
        merge.run()?;

        let mut extract = self.tool(MKVEXTRACT)?;
        extract.path_arg(&mks).args(["chapters", "-s"]).path_arg(&ogm);
        extract.run()?;

        let (text, encoding) = decode_auto(&fs::read(&ogm)?);
        debug!("Extracted {} bytes of chapters ({})", text.len(), encoding);
        Ok(text)
    }

    fn embed_chapters(
        &self,
        ogm_text: &str,
        target: &Path,
        language: Option<&str>,
    ) -> ConverterResult<PathBuf> {
        let scratch = Self::scratch_dir()?;
        let mks = scratch.path().join("chapters.mks");
        let ogm = scratch.path().join("chapters.ogm.txt");

        fs::write(&ogm, Charset::Utf8 { bom: true }.encode(ogm_text)?)?;

        let mut merge = self.tool(MKVMERGE)?;
        merge.arg("-o").path_arg(&mks);
        if let Some(language) = language {
            merge.arg("--chapter-language").arg(language);
        }
        merge.args(["--chapter-charset", "UTF-8", "--chapters"]).path_arg(&ogm);
        merge.run()?;

        let mut extract = self.tool(MKVEXTRACT)?;
        extract.path_arg(&mks).arg("chapters").path_arg(target);
        extract.run()?;

        Ok(target.to_path_buf())
    }
}

/// A single synchronous tool invocation
struct ToolCommand {
    name: String,
    program: PathBuf,
    args: Vec<String>,
}

impl ToolCommand {
    fn new(name: &str, program: PathBuf) -> Self {
        Self {
            name: name.to_string(),
            program,
            args: Vec::new(),
        }
    }

    fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn path_arg(&mut self, path: &Path) -> &mut Self {
        self.arg(path.to_string_lossy())
    }

    /// Run to completion. MKVToolNix exits with 1 for warnings and 2 for
    /// errors; only errors fail the call.
    fn run(&self) -> ConverterResult<()> {
        debug!("Running {} {}", self.program.display(), self.args.join(" "));

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| ConverterError::ExternalToolFailure {
                tool: self.name.clone(),
                status: "spawn failure".to_string(),
                stderr: e.to_string(),
            })?;

        match output.status.code() {
            Some(0) => Ok(()),
            Some(1) => {
                warn!(
                    "{} reported warnings: {}",
                    self.name,
                    String::from_utf8_lossy(&output.stdout).trim()
                );
                Ok(())
            }
            _ => {
                // mkvmerge reports errors on stdout
                let mut message = String::from_utf8_lossy(&output.stderr).trim().to_string();
                if message.is_empty() {
                    message = String::from_utf8_lossy(&output.stdout).trim().to_string();
                }
                Err(ConverterError::ExternalToolFailure {
                    tool: self.name.clone(),
                    status: output.status.to_string(),
                    stderr: message,
                })
            }
        }
    }
}
