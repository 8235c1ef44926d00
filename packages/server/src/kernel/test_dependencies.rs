// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::{BaseFileStorage, ServerDeps};
use crate::domains::auth::JwtService;

// =============================================================================
// Mock File Storage
// =============================================================================

/// In-memory file storage that records every call
pub struct MockFileStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
    removed: Mutex<Vec<String>>,
    fail_stores: Mutex<bool>,
}

impl MockFileStorage {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            removed: Mutex::new(Vec::new()),
            fail_stores: Mutex::new(false),
        }
    }

    /// Make every subsequent `store` call fail
    pub fn failing(self) -> Self {
        *self.fail_stores.lock().unwrap() = true;
        self
    }

    /// Paths currently stored
    pub fn stored_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Contents of a stored file
    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Paths passed to `remove`, in call order
    pub fn removed_paths(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }

    pub fn was_removed(&self, path: &str) -> bool {
        self.removed.lock().unwrap().iter().any(|p| p == path)
    }
}

impl Default for MockFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseFileStorage for MockFileStorage {
    async fn store(&self, folder: &str, extension: &str, bytes: &[u8]) -> Result<String> {
        if *self.fail_stores.lock().unwrap() {
            anyhow::bail!("mock storage configured to fail");
        }
        let path = format!("{}/{}.{}", folder, Uuid::now_v7(), extension);
        self.files
            .lock()
            .unwrap()
            .insert(path.clone(), bytes.to_vec());
        Ok(path)
    }

    async fn remove(&self, path: &str) -> Result<()> {
        self.files.lock().unwrap().remove(path);
        self.removed.lock().unwrap().push(path.to_string());
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("http://media.test/{}", path)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub storage: Arc<MockFileStorage>,
    pub jwt_service: Arc<JwtService>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(MockFileStorage::new()),
            jwt_service: Arc::new(JwtService::new("test_secret_key", "test_issuer".to_string())),
        }
    }

    /// Set a mock file storage
    pub fn mock_storage(mut self, storage: MockFileStorage) -> Self {
        self.storage = Arc::new(storage);
        self
    }

    /// Convert into ServerDeps for testing
    pub fn into_deps(self, db_pool: PgPool) -> ServerDeps {
        ServerDeps::new(db_pool, self.storage, self.jwt_service)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
