//! Local-disk file storage for uploaded gallery images and documents.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

use super::BaseFileStorage;

/// Stores files below `root`, served by a static handler at `base_url`.
pub struct LocalFileStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a stored relative path, refusing anything that escapes `root`.
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            anyhow::bail!("Refusing storage path outside media root: {}", path);
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BaseFileStorage for LocalFileStorage {
    async fn store(&self, folder: &str, extension: &str, bytes: &[u8]) -> Result<String> {
        let relative = format!("{}/{}.{}", folder, Uuid::now_v7(), extension);
        let full_path = self.resolve(&relative)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        tokio::fs::write(&full_path, bytes)
            .await
            .with_context(|| format!("Failed to write {}", full_path.display()))?;

        tracing::debug!(path = %relative, size = bytes.len(), "Stored file");
        Ok(relative)
    }

    async fn remove(&self, path: &str) -> Result<()> {
        let full_path = self.resolve(path)?;
        match tokio::fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", full_path.display())),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}
