pub mod service;

use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::metadata::domain::MetadataResolver;

// RemovalReport partitions a bulk removal, both lists keep request order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemovalReport {
    pub deleted: Vec<String>,
    pub not_found: Vec<String>,
}

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    // normalizes the isbn and fails when the catalog already holds it
    fn check_new_isbn(&self, isbn: &str) -> LibraryResult<String>;
    async fn add_book_by_isbn(&mut self, isbn: &str, resolver: &dyn MetadataResolver) -> LibraryResult<BookDto>;
    async fn remove_book(&mut self, isbn: &str) -> LibraryResult<bool>;
    async fn remove_books(&mut self, isbns: &[String]) -> LibraryResult<RemovalReport>;
    fn find_book(&self, isbn: &str) -> Option<BookDto>;
    fn list_books(&self) -> Vec<BookDto>;
}

// SharedCatalog serializes every catalog call behind one async lock
pub type SharedCatalog = Arc<Mutex<Box<dyn CatalogService>>>;

pub fn shared(catalog: Box<dyn CatalogService>) -> SharedCatalog {
    Arc::new(Mutex::new(catalog))
}
