use anyhow::Result;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem-backed store for echoed uploads.
///
/// Every saved payload gets a freshly generated UUID name, so files are
/// never overwritten. Nothing is ever deleted; there is no retention
/// policy. A collision between two generated names is treated as
/// negligible and not checked for.
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Write `data` under a fresh `<uuid><ext>` name and return the
    /// destination path. `ext` is the dotted suffix ("" for none).
    pub async fn save(&self, ext: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        let dest = self.root.join(format!("{}{}", Uuid::new_v4(), ext));
        tokio::fs::write(&dest, data).await?;
        Ok(dest)
    }

    /// Read a stored file back into memory.
    pub async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

/// Extension of `filename`, dot included ("" when there is none).
///
/// Matches path-suffix semantics: only the last component counts, and a
/// leading-dot name like `.env` has no extension.
pub fn file_suffix(filename: &str) -> String {
    match Path::new(filename).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{}", ext),
        None => String::new(),
    }
}
