// In-memory adapters - Port implementations for tests and dry runs

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ConverterError, ConverterResult};
use crate::ports::{ClipboardPort, ContainerToolPort, FsPort};
use crate::utils::encoding::{decode_auto, Charset};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Clipboard held in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard preloaded with `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: Mutex::new(Some(text.into())),
        }
    }

    /// Current contents
    pub fn contents(&self) -> Option<String> {
        lock(&self.content).clone()
    }
}

impl ClipboardPort for MemoryClipboard {
    fn read_text(&self) -> ConverterResult<Option<String>> {
        Ok(self.contents())
    }

    fn write_text(&self, text: &str) -> ConverterResult<()> {
        *lock(&self.content) = Some(text.to_string());
        Ok(())
    }
}

/// File system held in memory; files are stored as encoded bytes
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file with raw bytes
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        lock(&self.files).insert(path.into(), bytes.into());
    }

    /// Raw bytes of a file
    pub fn bytes(&self, path: &Path) -> Option<Vec<u8>> {
        lock(&self.files).get(path).cloned()
    }

    /// All stored paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = lock(&self.files).keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl FsPort for MemoryFs {
    fn file_exists(&self, path: &Path) -> bool {
        lock(&self.files).contains_key(path)
    }

    fn read_text(&self, path: &Path) -> ConverterResult<String> {
        let bytes = self.bytes(path).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })?;
        Ok(decode_auto(&bytes).0)
    }

    fn write_text(&self, path: &Path, text: &str, charset: Charset) -> ConverterResult<()> {
        let bytes = charset.encode(text)?;
        self.insert(path, bytes);
        Ok(())
    }
}

/// One recorded `embed_chapters` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedCall {
    pub ogm_text: String,
    pub target: PathBuf,
    pub language: Option<String>,
}

/// Container tool stand-in.
///
/// Extraction returns canned OGM text per container path; embedding writes
/// a small XML document into the shared [`MemoryFs`] and records the call.
#[derive(Debug)]
pub struct FakeContainerTool {
    fs: Arc<MemoryFs>,
    containers: Mutex<HashMap<PathBuf, String>>,
    extract_calls: Mutex<Vec<(PathBuf, Option<String>)>>,
    embed_calls: Mutex<Vec<EmbedCall>>,
    fail_with: Mutex<Option<String>>,
}

impl FakeContainerTool {
    pub fn new(fs: Arc<MemoryFs>) -> Self {
        Self {
            fs,
            containers: Mutex::new(HashMap::new()),
            extract_calls: Mutex::new(Vec::new()),
            embed_calls: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    /// Register a container whose chapters extract to `ogm_text`
    pub fn add_container(&self, path: impl Into<PathBuf>, ogm_text: impl Into<String>) {
        lock(&self.containers).insert(path.into(), ogm_text.into());
    }

    /// Make every later call fail as if the tool exited with an error
    pub fn fail_with(&self, stderr: impl Into<String>) {
        *lock(&self.fail_with) = Some(stderr.into());
    }

    pub fn extract_calls(&self) -> Vec<(PathBuf, Option<String>)> {
        lock(&self.extract_calls).clone()
    }

    pub fn embed_calls(&self) -> Vec<EmbedCall> {
        lock(&self.embed_calls).clone()
    }

    fn check_failure(&self) -> ConverterResult<()> {
        match lock(&self.fail_with).as_ref() {
            Some(stderr) => Err(ConverterError::ExternalToolFailure {
                tool: "mkvmerge".to_string(),
                status: "exit status: 2".to_string(),
                stderr: stderr.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl ContainerToolPort for FakeContainerTool {
    fn extract_chapters(&self, container: &Path, charset: Option<&str>) -> ConverterResult<String> {
        lock(&self.extract_calls).push((container.to_path_buf(), charset.map(str::to_string)));
        self.check_failure()?;

        lock(&self.containers)
            .get(container)
            .cloned()
            .ok_or_else(|| ConverterError::ExternalToolFailure {
                tool: "mkvmerge".to_string(),
                status: "exit status: 2".to_string(),
                stderr: format!("no chapters in {}", container.display()),
            })
    }

    fn embed_chapters(
        &self,
        ogm_text: &str,
        target: &Path,
        language: Option<&str>,
    ) -> ConverterResult<PathBuf> {
        lock(&self.embed_calls).push(EmbedCall {
            ogm_text: ogm_text.to_string(),
            target: target.to_path_buf(),
            language: language.map(str::to_string),
        });
        self.check_failure()?;

        let xml = format!(
            "<Chapters language=\"{}\">\n{}</Chapters>\n",
            language.unwrap_or(""),
            ogm_text
        );
        self.fs.insert(target, xml.into_bytes());
        Ok(target.to_path_buf())
    }
}
