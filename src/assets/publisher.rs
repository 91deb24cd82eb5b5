//! Content-addressed publishing of static asset directories

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

use sha2::{Digest, Sha256};

/// Asset error types
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset source directory not found: {0}")]
    SourceMissing(PathBuf),

    #[error("Asset publish failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Copies asset directories beneath a web-servable root and hands out their
/// public base URLs.
///
/// The target subdirectory is derived from the canonical source path, so the
/// same directory always publishes to the same URL. Publishing is idempotent
/// per process: repeat calls for a directory are answered from a cache
/// without touching the filesystem again.
#[derive(Debug)]
pub struct AssetPublisher {
    public_root: PathBuf,
    base_url: String,
    published: Mutex<HashMap<PathBuf, String>>,
}

impl AssetPublisher {
    pub fn new(public_root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            public_root: public_root.into(),
            base_url: base_url.into(),
            published: Mutex::new(HashMap::new()),
        }
    }

    /// Publish a directory and return its stable public base URL
    pub fn publish(&self, source: &Path) -> Result<String, AssetError> {
        let canonical = source
            .canonicalize()
            .map_err(|_| AssetError::SourceMissing(source.to_path_buf()))?;
        if !canonical.is_dir() {
            return Err(AssetError::SourceMissing(source.to_path_buf()));
        }

        {
            let published = self.published.lock().expect("publish cache lock poisoned");
            if let Some(url) = published.get(&canonical) {
                return Ok(url.clone());
            }
        }

        let hash = path_hash(&canonical);
        let target = self.public_root.join(&hash);
        if !target.exists() {
            copy_dir(&canonical, &target)?;
            tracing::debug!(source = %canonical.display(), target = %target.display(), "published assets");
        }

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), hash);
        self.published
            .lock()
            .expect("publish cache lock poisoned")
            .insert(canonical, url.clone());
        Ok(url)
    }
}

fn path_hash(path: &Path) -> String {
    let digest = Sha256::digest(path.to_string_lossy().as_bytes());
    hex::encode(digest)[..12].to_string()
}

fn copy_dir(source: &Path, target: &Path) -> std::io::Result<()> {
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let dest = target.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
