use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::metadata::domain::BookMetadata;
use crate::utils::date::opt_serializer;

pub const UNKNOWN_AUTHOR: &str = "Unknown";

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_serializer")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            created_at: None,
            genres: vec![],
        }
    }

    // joins resolved author names, falling back to "Unknown"
    pub fn author_from(names: &[String]) -> String {
        if names.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            names.join(", ")
        }
    }

    // a freshly resolved book, stamped with the current time
    pub fn from_metadata(metadata: &BookMetadata) -> BookDto {
        BookDto {
            title: metadata.title.to_string(),
            author: BookDto::author_from(&metadata.authors),
            isbn: metadata.isbn.to_string(),
            created_at: Some(Utc::now().naive_utc()),
            genres: metadata.subjects.clone(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            created_at: other.created_at,
            genres: other.genres.clone(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            created_at: other.created_at,
            genres: other.genres.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::metadata::domain::BookMetadata;

    #[tokio::test]
    async fn test_should_build_book_from_metadata() {
        let metadata = BookMetadata::new("9780140328721", "Matilda", &["Roald Dahl", "Quentin Blake"], &["Fiction"]);
        let book = BookDto::from_metadata(&metadata);
        assert_eq!("Roald Dahl, Quentin Blake", book.author.as_str());
        assert_eq!(vec!["Fiction".to_string()], book.genres);
        assert!(book.created_at.is_some());

        let anonymous = BookDto::from_metadata(&BookMetadata::new("9780000000002", "Pamphlet", &[], &[]));
        assert_eq!("Unknown", anonymous.author.as_str());
    }

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("9780345339683", "The Hobbit", "J.R.R. Tolkien");
        assert_eq!("9780345339683", book.isbn.as_str());
        assert_eq!("The Hobbit", book.title.as_str());
        assert_eq!(None, book.created_at);
    }

    #[tokio::test]
    async fn test_should_display_book() {
        let book = BookDto::new("9780345339683", "The Hobbit", "J.R.R. Tolkien");
        assert_eq!("The Hobbit by J.R.R. Tolkien (ISBN: 9780345339683)", book.to_string());
    }

    #[tokio::test]
    async fn test_should_join_authors() {
        assert_eq!("Unknown", BookDto::author_from(&[]).as_str());
        assert_eq!("Terry Pratchett, Neil Gaiman",
                   BookDto::author_from(&["Terry Pratchett".to_string(), "Neil Gaiman".to_string()]).as_str());
    }

    #[tokio::test]
    async fn test_should_convert_entity() {
        let mut book = BookDto::new("9780345339683", "The Hobbit", "J.R.R. Tolkien");
        book.genres = vec!["Fantasy".to_string()];
        let entity = BookEntity::from(&book);
        assert_eq!(book, BookDto::from(&entity));
    }
}
