use std::sync::Mutex;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog in process, nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Mutex<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn read(&self) -> Vec<BookEntity> {
        match self.books.lock() {
            Ok(books) => books.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    async fn write(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        let mut books = self.books.lock()
            .map_err(|err| LibraryError::runtime(format!("memory store poisoned {}", err).as_str(), None))?;
        *books = entities.to_vec();
        Ok(())
    }
}

impl BookRepository for MemoryBookRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_write_read_books() {
        let repo = MemoryBookRepository::new();
        assert!(repo.read().await.is_empty());

        let books = vec![
            BookEntity::new("1", "one", "a"),
            BookEntity::new("2", "two", "b"),
        ];
        repo.write(&books).await.expect("should write books");
        assert_eq!(books, repo.read().await);
    }

    #[tokio::test]
    async fn test_should_start_with_books() {
        let repo = MemoryBookRepository::with_books(vec![BookEntity::new("1", "one", "a")]);
        assert_eq!(1, repo.read().await.len());
    }
}
