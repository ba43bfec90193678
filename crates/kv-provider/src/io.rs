//! File-system collaborator for reading and writing data files

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Encoding used when none is configured
pub const DEFAULT_ENCODING: &str = "utf8";

/// Asynchronous text file access used by data providers
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read a whole data file as text in the given encoding.
    async fn read_data_file(&self, path: &Path, encoding: &str) -> Result<String>;

    /// Replace the contents of a data file.
    async fn write_data_file(&self, path: &Path, content: &str) -> Result<()>;
}

/// [`FileSystem`] backed by the local disk through `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

fn is_utf8(encoding: &str) -> bool {
    matches!(encoding.to_ascii_lowercase().as_str(), "utf8" | "utf-8")
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn read_data_file(&self, path: &Path, encoding: &str) -> Result<String> {
        if !is_utf8(encoding) {
            return Err(Error::UnsupportedEncoding(encoding.to_string()));
        }
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::read(path, e))?;
        String::from_utf8(bytes).map_err(|e| {
            Error::read(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    /// Writes to a temp file in the same directory, then renames it over
    /// the target so readers never see a partial file.
    async fn write_data_file(&self, path: &Path, content: &str) -> Result<()> {
        let temp_path = temp_path_for(path);

        if let Err(e) = tokio::fs::write(&temp_path, content).await {
            return Err(Error::write(path, e));
        }
        if let Err(e) = tokio::fs::rename(&temp_path, path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(Error::write(path, e));
        }
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}
