//! Sources of uploaded file content.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use bault_core::error::{AppError, ErrorKind};
use bault_core::result::AppResult;

/// A file offered for upload.
///
/// Name, size, and modification time are known up front; the text body is
/// read lazily and only for text-like names.
#[async_trait]
pub trait ContentSource: Send + Sync + std::fmt::Debug {
    /// File name including extension.
    fn name(&self) -> &str;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// Modification time reported by the source, if any.
    fn last_modified(&self) -> Option<DateTime<Utc>>;

    /// Read the whole body as UTF-8 text.
    async fn read_text(&self) -> AppResult<String>;
}

/// A file on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    size: u64,
    modified: Option<DateTime<Utc>>,
}

impl LocalFile {
    /// Stat a local file.
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::NotFound,
                format!("Cannot read '{}': {e}", path.display()),
                e,
            )
        })?;

        if !metadata.is_file() {
            return Err(AppError::validation(format!(
                "'{}' is not a regular file",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        Ok(Self {
            name,
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            path,
        })
    }
}

#[async_trait]
impl ContentSource for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.modified
    }

    async fn read_text(&self) -> AppResult<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// An in-memory file body.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    data: Bytes,
    modified: Option<DateTime<Utc>>,
}

impl MemoryFile {
    /// Wrap a body under the given name.
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            modified: None,
        }
    }

    /// Report the given modification time.
    pub fn modified_at(mut self, at: DateTime<Utc>) -> Self {
        self.modified = Some(at);
        self
    }
}

#[async_trait]
impl ContentSource for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.modified
    }

    async fn read_text(&self) -> AppResult<String> {
        std::str::from_utf8(&self.data)
            .map(str::to_string)
            .map_err(|e| AppError::storage(format!("'{}' is not valid UTF-8: {e}", self.name)))
    }
}
