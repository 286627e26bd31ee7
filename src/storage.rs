use std::io;
use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

/// Disk-backed store for item photos, served under /media. Keys are
/// store-generated; the client's filename contributes only its extension,
/// which rules out both collisions and hostile names.
///
/// There is deliberately no delete: a record insert that fails after a
/// successful store leaves the file orphaned, matching the system's
/// accepted inconsistency window.
#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
    public_base: String,
}

pub struct StoredImage {
    pub key: String,
    pub public_url: String,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>, public_base: &str) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(ImageStore {
            root,
            public_base: public_base.trim_end_matches('/').to_string(),
        })
    }

    pub async fn store(&self, bytes: &[u8], original_name: &str) -> io::Result<StoredImage> {
        let key = Self::key_for(original_name);
        tokio::fs::write(self.root.join(&key), bytes).await?;
        info!("Stored image {} ({} bytes)", key, bytes.len());
        Ok(StoredImage {
            public_url: self.public_url(&key),
            key,
        })
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/media/{}", self.public_base, key)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_for(original_name: &str) -> String {
        match image_extension(original_name) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        }
    }
}

fn image_extension(original_name: &str) -> Option<&str> {
    let ext = Path::new(original_name).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > 8 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}
