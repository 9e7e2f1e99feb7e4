use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, RemovalReport};
use crate::core::domain::Identifiable;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::metadata::domain::MetadataResolver;
use crate::utils::isbn::normalize_isbn;

const EVENT_NAME: &str = "books";

// CatalogServiceImpl owns the in-memory book sequence and mirrors it to the
// repository after every mutation. A failed write rolls the mutation back.
pub struct CatalogServiceImpl {
    books: Vec<BookEntity>,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub async fn load(book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        let mut books: Vec<BookEntity> = vec![];
        for book in book_repository.read().await {
            if books.iter().any(|b| b.isbn == book.isbn) {
                warn!("skipping duplicate record {} in {}", book.isbn, book_repository.location());
                continue;
            }
            books.push(book);
        }
        info!("loaded {} books from {}", books.len(), book_repository.location());
        Self {
            books,
            book_repository,
            events_publisher,
        }
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.id() == isbn)
    }

    async fn persist(&self) -> LibraryResult<()> {
        self.book_repository.write(&self.books).await
    }

    // the change is already durable, a lost event only gets logged
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            warn!("failed to publish catalog event: {}", err);
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        if book.isbn.trim().is_empty() {
            return Err(LibraryError::validation("isbn must not be empty", Some("isbn".to_string())));
        }
        if book.title.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("title of {} must not be empty", book.isbn).as_str(), Some("title".to_string())));
        }
        if self.position(book.isbn.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("Book with ISBN {} already exists", book.isbn).as_str()));
        }
        self.books.push(BookEntity::from(book));
        if let Err(err) = self.persist().await {
            self.books.pop();
            return Err(err);
        }
        info!("added {}", book);
        self.publish(DomainEvent::added(EVENT_NAME, book.isbn.as_str(), book)).await;
        Ok(book.clone())
    }

    fn check_new_isbn(&self, isbn: &str) -> LibraryResult<String> {
        let normalized = normalize_isbn(isbn)?;
        if self.position(normalized.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("Book with ISBN {} already exists", normalized).as_str()));
        }
        Ok(normalized)
    }

    async fn add_book_by_isbn(&mut self, isbn: &str, resolver: &dyn MetadataResolver) -> LibraryResult<BookDto> {
        // skip the lookup for a book we already hold
        let normalized = self.check_new_isbn(isbn)?;
        let metadata = resolver.fetch(normalized.as_str()).await?;
        self.add_book(&BookDto::from_metadata(&metadata)).await
    }

    async fn remove_book(&mut self, isbn: &str) -> LibraryResult<bool> {
        let Some(i) = self.position(isbn) else {
            return Ok(false);
        };
        let removed = self.books.remove(i);
        if let Err(err) = self.persist().await {
            self.books.insert(i, removed);
            return Err(err);
        }
        info!("removed {}", removed.isbn);
        self.publish(DomainEvent::deleted(EVENT_NAME, isbn, &removed)).await;
        Ok(true)
    }

    async fn remove_books(&mut self, isbns: &[String]) -> LibraryResult<RemovalReport> {
        let mut report = RemovalReport::default();
        for isbn in isbns {
            if self.remove_book(isbn.as_str()).await? {
                report.deleted.push(isbn.to_string());
            } else {
                report.not_found.push(isbn.to_string());
            }
        }
        Ok(report)
    }

    fn find_book(&self, isbn: &str) -> Option<BookDto> {
        self.position(isbn).map(|i| BookDto::from(&self.books[i]))
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.books.iter().map(BookDto::from).collect()
    }
}
