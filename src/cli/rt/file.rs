use anyhow::anyhow;
use course_core::FileIO;
use tokio::io::AsyncReadExt;

#[derive(Default, Clone)]
pub struct NativeFileIO {}

#[async_trait::async_trait]
impl FileIO for NativeFileIO {
    async fn read<'a>(&'a self, path: &'a str) -> anyhow::Result<String> {
        let mut file = tokio::fs::File::open(path).await?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .await
            .map_err(|e| anyhow!("{}", e))?;
        log::debug!("File read: {} ... ok", path);
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("courses.json");
        tokio::fs::write(&path, b"[]").await?;

        let file_io = NativeFileIO::default();
        assert_eq!(file_io.read(path.to_str().unwrap()).await?, "[]");
        Ok(())
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let file_io = NativeFileIO::default();
        assert!(file_io.read(path.to_str().unwrap()).await.is_err());
    }
}
