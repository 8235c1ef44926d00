use crate::common::{ComplexId, NewsId, DocumentId};

/// What an actor is trying to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Update the complex or attach news/documents to it
    ManageComplex(ComplexId),

    /// Delete a news item of a complex
    ManageNews(NewsId),

    /// Delete a document of a complex
    ManageDocument(DocumentId),
}

impl Capability {
    /// Human-readable resource name for error messages
    pub fn resource(&self) -> &'static str {
        match self {
            Capability::ManageComplex(_) => "Residential complex",
            Capability::ManageNews(_) => "News",
            Capability::ManageDocument(_) => "Document",
        }
    }
}
