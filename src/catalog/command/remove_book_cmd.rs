use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog: SharedCatalog,
}

impl RemoveBookCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub isbn: String,
}

impl RemoveBookCommandResponse {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let removed = self.catalog.lock().await.remove_book(req.isbn.as_str()).await?;
        if removed {
            Ok(RemoveBookCommandResponse::new(req.isbn))
        } else {
            Err(CommandError::NotFound { message: format!("book not found for {}", req.isbn) })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let catalog = factory::create_memory_catalog().await;
        catalog.lock().await.add_book(&BookDto::new("1", "one", "a")).await.expect("should add book");

        let remove_cmd = RemoveBookCommand::new(catalog.clone());
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new("1")).await.expect("should remove book");
        assert!(catalog.lock().await.list_books().is_empty());

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("1")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
