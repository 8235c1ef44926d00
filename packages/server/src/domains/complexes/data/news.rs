use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::complexes::models::{ComplexDocument, ComplexNews};
use crate::kernel::BaseFileStorage;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsData {
    pub id: String,
    pub residential_complex: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<ComplexNews> for NewsData {
    fn from(news: ComplexNews) -> Self {
        Self {
            id: news.id.to_string(),
            residential_complex: news.residential_complex_id.to_string(),
            title: news.title,
            body: news.body,
            created_at: news.created_at,
        }
    }
}

/// Document as returned to clients; `file` is a public URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentData {
    pub id: String,
    pub residential_complex: String,
    pub name: String,
    pub file: String,
    pub created_at: DateTime<Utc>,
}

impl DocumentData {
    pub fn from_model(document: ComplexDocument, storage: &dyn BaseFileStorage) -> Self {
        Self {
            id: document.id.to_string(),
            residential_complex: document.residential_complex_id.to_string(),
            file: storage.public_url(&document.file_path),
            name: document.name,
            created_at: document.created_at,
        }
    }
}
