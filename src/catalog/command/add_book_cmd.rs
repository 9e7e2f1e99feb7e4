use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, UNKNOWN_AUTHOR};
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};
use crate::metadata::domain::MetadataResolver;

pub struct AddBookCommand {
    catalog: SharedCatalog,
    resolver: Arc<dyn MetadataResolver>,
}

impl AddBookCommand {
    pub fn new(catalog: SharedCatalog, resolver: Arc<dyn MetadataResolver>) -> Self {
        Self {
            catalog,
            resolver,
        }
    }
}

// AddBookCommandRequest adds the described book when a title is given,
// otherwise the metadata is looked up by isbn.
#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

impl AddBookCommandRequest {
    pub fn by_isbn(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: None,
            author: None,
            genres: None,
        }
    }

    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            genres: None,
        }
    }

    pub fn build_book(&self) -> Option<BookDto> {
        let title = self.title.as_ref()?;
        let author = self.author.as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(UNKNOWN_AUTHOR);
        let mut book = BookDto::new(self.isbn.as_str(), title.as_str(), author);
        book.created_at = Some(Utc::now().naive_utc());
        book.genres = self.genres.clone().unwrap_or_default();
        Some(book)
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = match req.build_book() {
            Some(book) => book,
            None => {
                // the lookup runs unlocked, add_book checks uniqueness again
                let isbn = self.catalog.lock().await.check_new_isbn(req.isbn.as_str())?;
                let metadata = self.resolver.fetch(isbn.as_str()).await?;
                BookDto::from_metadata(&metadata)
            }
        };
        let book = self.catalog.lock().await.add_book(&book).await?;
        Ok(AddBookCommandResponse::new(book))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use async_trait::async_trait;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::LibraryResult;
    use crate::metadata::domain::{BookMetadata, MetadataResolver};
    use crate::metadata::static_resolver::StaticResolver;

    struct SlowResolver {
        delay: Duration,
        inner: StaticResolver,
    }

    #[async_trait]
    impl MetadataResolver for SlowResolver {
        async fn fetch(&self, identifier: &str) -> LibraryResult<BookMetadata> {
            tokio::time::sleep(self.delay).await;
            self.inner.fetch(identifier).await
        }
    }

    async fn build_command() -> AddBookCommand {
        let catalog = factory::create_memory_catalog().await;
        let resolver = StaticResolver::new()
            .with_book(BookMetadata::new("9780140328721", "Matilda", &["Roald Dahl"], &["Fiction"]));
        AddBookCommand::new(catalog, Arc::new(resolver))
    }

    #[tokio::test]
    async fn test_should_run_add_book_by_isbn() {
        let cmd = build_command().await;
        let res = cmd.execute(AddBookCommandRequest::by_isbn("9780140328721")).await.expect("should add book");
        assert_eq!("Roald Dahl", res.book.author.as_str());
    }

    #[tokio::test]
    async fn test_should_run_add_described_book() {
        let cmd = build_command().await;
        let mut req = AddBookCommandRequest::new("9780345339683", "The Hobbit", "");
        req.genres = Some(vec!["Fantasy".to_string()]);
        let res = cmd.execute(req).await.expect("should add book");
        assert_eq!("Unknown", res.book.author.as_str());
        assert_eq!(vec!["Fantasy".to_string()], res.book.genres);
        assert!(res.book.created_at.is_some());

        let res = cmd.execute(AddBookCommandRequest::new("9780345339683", "The Hobbit", "Tolkien")).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_serve_catalog_while_lookup_in_flight() {
        let catalog = factory::create_memory_catalog().await;
        let resolver = SlowResolver {
            delay: Duration::from_secs(2),
            inner: StaticResolver::new()
                .with_book(BookMetadata::new("9780140328721", "Matilda", &["Roald Dahl"], &[])),
        };
        let cmd = AddBookCommand::new(catalog.clone(), Arc::new(resolver));
        let add = tokio::spawn(async move {
            cmd.execute(AddBookCommandRequest::by_isbn("9780140328721")).await
        });
        tokio::time::sleep(Duration::from_millis(100)).await;

        let list = tokio::time::timeout(Duration::from_millis(500),
                                        ListBooksCommand::new(catalog.clone()).execute(ListBooksCommandRequest::default()))
            .await.expect("list should not wait for the lookup").expect("should list");
        assert!(list.books.is_empty());

        let res = add.await.expect("add task").expect("should add book");
        assert_eq!("Roald Dahl", res.book.author.as_str());
        assert_eq!(1, catalog.lock().await.list_books().len());
    }
}
