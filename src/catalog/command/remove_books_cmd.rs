use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::{RemovalReport, SharedCatalog};
use crate::core::command::{Command, CommandError};

pub struct RemoveBooksCommand {
    catalog: SharedCatalog,
}

impl RemoveBooksCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBooksCommandRequest {
    pub isbns: Vec<String>,
}

impl RemoveBooksCommandRequest {
    pub fn new(isbns: &[&str]) -> Self {
        Self {
            isbns: isbns.iter().map(|s| s.to_string()).collect(),
        }
    }

    // splits comma separated input, blank entries are dropped
    pub fn parse(raw: &str) -> Self {
        Self {
            isbns: raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBooksCommandResponse {
    #[serde(flatten)]
    pub report: RemovalReport,
}

#[async_trait]
impl Command<RemoveBooksCommandRequest, RemoveBooksCommandResponse> for RemoveBooksCommand {
    async fn execute(&self, req: RemoveBooksCommandRequest) -> Result<RemoveBooksCommandResponse, CommandError> {
        self.catalog.lock().await.remove_books(&req.isbns).await
            .map_err(CommandError::from).map(|report| RemoveBooksCommandResponse { report })
    }
}
