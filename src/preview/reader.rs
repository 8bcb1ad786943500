//! File reading behind a trait so previews can be tested without disk access

use super::data_uri::{encode_data_uri, mime_for_path};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default cap on previewed file size (10 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a file", path.display())]
    NotAFile { path: PathBuf },
    #[error("{} is {size} bytes, larger than the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

/// Reads a file into a `data:` URI
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read_as_data_url(&self, path: &Path) -> Result<String, PreviewError>;
}

/// [`FileReader`] backed by `tokio::fs`
#[derive(Debug, Clone)]
pub struct TokioFileReader {
    max_bytes: u64,
}

impl TokioFileReader {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl Default for TokioFileReader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_BYTES)
    }
}

#[async_trait]
impl FileReader for TokioFileReader {
    async fn read_as_data_url(&self, path: &Path) -> Result<String, PreviewError> {
        let io_err = |source| PreviewError::Io {
            path: path.to_path_buf(),
            source,
        };

        let metadata = tokio::fs::metadata(path).await.map_err(io_err)?;
        if !metadata.is_file() {
            return Err(PreviewError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        if metadata.len() > self.max_bytes {
            return Err(PreviewError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: self.max_bytes,
            });
        }

        let bytes = tokio::fs::read(path).await.map_err(io_err)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(encode_data_uri(mime_for_path(path), &bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_reads_file_as_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"hello")
            .unwrap();

        let uri = assert_ok!(TokioFileReader::default().read_as_data_url(&path).await);
        assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = assert_err!(
            TokioFileReader::default()
                .read_as_data_url(&dir.path().join("missing.png"))
                .await
        );
        assert!(matches!(err, PreviewError::Io { .. }));
    }

    #[tokio::test]
    async fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = TokioFileReader::default()
            .read_as_data_url(dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, PreviewError::NotAFile { .. }));
    }

    #[tokio::test]
    async fn test_oversized_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.gif");
        std::fs::write(&path, vec![0u8; 32]).unwrap();

        let err = TokioFileReader::new(16)
            .read_as_data_url(&path)
            .await
            .unwrap_err();
        match err {
            PreviewError::TooLarge { size, limit, .. } => {
                assert_eq!(size, 32);
                assert_eq!(limit, 16);
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = PreviewError::NotAFile {
            path: PathBuf::from("/tmp/photos"),
        };
        assert_eq!(err.to_string(), "/tmp/photos is not a file");
    }
}
