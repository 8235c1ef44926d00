// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseFileStorage)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// File Storage Trait (Infrastructure - uploaded images and documents)
// =============================================================================

#[async_trait]
pub trait BaseFileStorage: Send + Sync {
    /// Persist `bytes` under `folder` and return the stored relative path
    /// (e.g. `gallery/0190d3c2-....png`).
    async fn store(&self, folder: &str, extension: &str, bytes: &[u8]) -> Result<String>;

    /// Remove a previously stored file. Removing a missing file is not an error.
    async fn remove(&self, path: &str) -> Result<()>;

    /// Public URL clients use to fetch a stored file
    fn public_url(&self, path: &str) -> String;
}
