use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::library::{LibraryError, LibraryResult};
use crate::metadata::domain::{BookMetadata, MetadataResolver};
use crate::utils::isbn::normalize_isbn;

// StaticResolver answers lookups from a fixed set of records keyed by the
// normalized isbn.
#[derive(Debug, Default, Clone)]
pub struct StaticResolver {
    records: HashMap<String, BookMetadata>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, metadata: BookMetadata) -> Self {
        self.records.insert(metadata.isbn.to_string(), metadata);
        self
    }
}

#[async_trait]
impl MetadataResolver for StaticResolver {
    async fn fetch(&self, identifier: &str) -> LibraryResult<BookMetadata> {
        let isbn = normalize_isbn(identifier)?;
        self.records.get(&isbn).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("no record for isbn {}", isbn).as_str()))
    }
}
