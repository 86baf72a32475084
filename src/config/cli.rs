use crate::core::Storage;
use crate::utils::error::Result;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Path that stands for stdin when read and stdout when written.
pub const STDIO_PATH: &str = "-";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        if path == STDIO_PATH {
            let mut data = Vec::new();
            tokio::io::stdin().read_to_end(&mut data).await?;
            return Ok(data);
        }

        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        if path == STDIO_PATH {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(data).await?;
            stdout.flush().await?;
            return Ok(());
        }

        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read_nested_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage
            .write_file("reports/out.txt", b"1 3 N\n5 1 E")
            .await
            .unwrap();

        let data = storage.read_file("reports/out.txt").await.unwrap();
        assert_eq!(data, b"1 3 N\n5 1 E");
        assert!(temp_dir.path().join("reports").is_dir());
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("nope.txt").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::RoverError::IoError(_)));
    }
}
