use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::SharedCatalog;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::metadata::domain::MetadataResolver;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: SharedCatalog,
    pub resolver: Arc<dyn MetadataResolver>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: SharedCatalog, resolver: Arc<dyn MetadataResolver>) -> AppState {
        AppState {
            config,
            catalog,
            resolver,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub type ServerError = (StatusCode, Json<ErrorBody>);

fn server_error(status: StatusCode, detail: String) -> ServerError {
    (status, Json(ErrorBody { detail }))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::UNPROCESSABLE_ENTITY, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
            CommandError::DuplicateKey { .. } => StatusCode::BAD_REQUEST,
            CommandError::Remote { .. } => StatusCode::BAD_REQUEST,
            CommandError::Network { .. } => StatusCode::BAD_REQUEST,
            CommandError::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        server_error(status, err.to_string())
    }
}
