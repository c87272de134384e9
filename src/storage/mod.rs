// Upload persistence

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Filesystem store for uploaded images.
///
/// Each upload is written under the configured directory with a random
/// UUID name so concurrent uploads never collide and client-supplied
/// filenames never touch the filesystem.
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory uploads are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist one upload, returning the generated filename.
    ///
    /// `extension` must include the leading dot (or be empty).
    pub async fn save(&self, extension: &str, bytes: &[u8]) -> Result<String> {
        let filename = format!("{}{}", Uuid::new_v4(), extension);
        let path = self.dir.join(&filename);
        tokio::fs::write(&path, bytes).await?;
        debug!("Saved upload to {}", path.display());
        Ok(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_writes_bytes_under_generated_name() {
        let dir = tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("uploads")).unwrap();

        let filename = store.save(".png", b"not-really-a-png").await.unwrap();
        assert!(filename.ends_with(".png"));

        let saved = std::fs::read(store.dir().join(&filename)).unwrap();
        assert_eq!(saved, b"not-really-a-png");
    }

    #[tokio::test]
    async fn test_save_generates_distinct_names() {
        let dir = tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();

        let first = store.save(".jpg", b"a").await.unwrap();
        let second = store.save(".jpg", b"b").await.unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_new_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = UploadStore::new(&nested).unwrap();
        assert!(store.dir().is_dir());
    }
}
