use crate::domain::ports::Storage;
use crate::utils::error::{IsingError, Result};
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted at the file's directory, plus the file name to read from it.
    pub fn for_file(path: &Path) -> Result<(Self, String)> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| IsingError::InvalidConfigValueError {
                field: "input".to_string(),
                value: path.display().to_string(),
                reason: "Path does not name a file".to_string(),
            })?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok((Self::new(dir), name.to_string()))
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage
            .write_file("nested/run/lattice.csv", b"1,-1\n")
            .await
            .unwrap();

        let data = storage.read_file("nested/run/lattice.csv").await.unwrap();
        assert_eq!(data, b"1,-1\n");
    }

    #[tokio::test]
    async fn test_for_file_reads_through_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("saved.csv");
        std::fs::write(&path, "1,1\n").unwrap();

        let (storage, name) = LocalStorage::for_file(&path).unwrap();
        assert_eq!(storage.base_path(), temp_dir.path());
        assert_eq!(name, "saved.csv");
        assert_eq!(storage.read_file(&name).await.unwrap(), b"1,1\n");
    }

    #[test]
    fn test_for_file_paths() {
        let (storage, name) = LocalStorage::for_file(Path::new("lattice.csv")).unwrap();
        assert_eq!(storage.base_path(), Path::new("."));
        assert_eq!(name, "lattice.csv");

        assert!(matches!(
            LocalStorage::for_file(Path::new("/")),
            Err(IsingError::InvalidConfigValueError { .. })
        ));
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let err = storage.read_file("missing.csv").await.unwrap_err();
        assert!(matches!(err, IsingError::IoError(_)));
    }
}
