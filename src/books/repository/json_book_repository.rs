use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// JsonFileBookRepository keeps the catalog as a pretty-printed json array.
#[derive(Debug)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl Repository<BookEntity> for JsonFileBookRepository {
    async fn read(&self) -> Vec<BookEntity> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no catalog at {}, starting empty", self.path.display());
                return vec![];
            }
            Err(err) => {
                warn!("failed to read catalog {}, starting empty: {}", self.path.display(), err);
                return vec![];
            }
        };
        parse_books(self.path.as_path(), contents.as_str())
    }

    async fn write(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(entities)?;
        let temp_path = self.temp_path();
        if let Err(err) = fs::write(&temp_path, json.as_bytes()).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(err.into());
        }
        if let Err(err) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(err.into());
        }
        debug!("wrote {} books to {}", entities.len(), self.path.display());
        Ok(())
    }
}

impl BookRepository for JsonFileBookRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// anything that is not a json array reads as an empty catalog, array
// elements that are not book records are dropped one by one
fn parse_books(path: &Path, contents: &str) -> Vec<BookEntity> {
    let items = match serde_json::from_str::<Value>(contents) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!("catalog {} is not a list, starting empty", path.display());
            return vec![];
        }
        Err(err) => {
            warn!("catalog {} is corrupt, starting empty: {}", path.display(), err);
            return vec![];
        }
    };
    let mut books = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<BookEntity>(item) {
            Ok(book) => books.push(book),
            Err(err) => warn!("skipping record {} in {}: {}", i, path.display(), err),
        }
    }
    books
}
