use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::opt_serializer;

// BookEntity is the flat record persisted for every catalog entry, the isbn
// is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_serializer")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            created_at: None,
            genres: vec![],
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use crate::books::domain::model::BookEntity;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("isbn", "title", "author");
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert!(book.genres.is_empty());
    }

    #[tokio::test]
    async fn test_should_omit_missing_optional_fields() {
        let book = BookEntity::new("9780199535675", "Ulysses", "James Joyce");
        let val = serde_json::to_value(&book).expect("serialize book");
        assert_eq!(json!({"title": "Ulysses", "author": "James Joyce", "isbn": "9780199535675", "genres": []}), val);
    }

    #[tokio::test]
    async fn test_should_read_minimal_record() {
        let book: BookEntity = serde_json::from_value(
            json!({"title": "Ulysses", "author": "James Joyce", "isbn": "9780199535675"})).expect("parse book");
        assert_eq!(None, book.created_at);
        assert!(book.genres.is_empty());
    }

    #[tokio::test]
    async fn test_should_keep_created_at() {
        let mut book = BookEntity::new("9780199535675", "Ulysses", "James Joyce");
        book.created_at = Some(Utc::now().naive_utc());
        book.genres = vec!["Fiction".to_string()];
        let json = serde_json::to_string(&book).expect("serialize book");
        let loaded: BookEntity = serde_json::from_str(json.as_str()).expect("parse book");
        assert_eq!(book, loaded);
    }
}
