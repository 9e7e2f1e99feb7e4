use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// BookMetadata is the bibliographic record resolved for an isbn. A lookup
// may succeed with fewer authors than the source references when some of
// them could not be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookMetadata {
    pub isbn: String,
    pub title: String,
    pub authors: Vec<String>,
    pub subjects: Vec<String>,
}

impl BookMetadata {
    pub fn new(isbn: &str, title: &str, authors: &[&str], subjects: &[&str]) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
pub trait MetadataResolver: Sync + Send {
    // normalizes the identifier and resolves title, authors and subjects
    async fn fetch(&self, identifier: &str) -> LibraryResult<BookMetadata>;
}
