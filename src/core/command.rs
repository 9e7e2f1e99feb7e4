use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    InvalidIdentifier {
        message: String,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Remote {
        message: String,
        status: Option<u16>,
    },
    Network {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidIdentifier { message } => {
                CommandError::InvalidIdentifier { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::Remote { message, status } => {
                CommandError::Remote { message, status }
            }
            LibraryError::Network { message } => {
                CommandError::Network { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidIdentifier { message } => write!(f, "{}", message),
            CommandError::NotFound { message } => write!(f, "{}", message),
            CommandError::DuplicateKey { message } => write!(f, "{}", message),
            CommandError::Remote { message, .. } => write!(f, "{}", message),
            CommandError::Network { message } => write!(f, "{}", message),
            CommandError::Validation { message, .. } => write!(f, "{}", message),
            CommandError::Serialization { message } => write!(f, "{}", message),
            CommandError::Runtime { message, .. } => write!(f, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::InvalidIdentifier { message: "test".to_string() };
        let _ = CommandError::Remote { message: "test".to_string(), status: None };
        let _ = CommandError::Network { message: "test".to_string() };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::not_found("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("x")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::remote("x", Some(502))), CommandError::Remote { status: Some(502), .. }));
        assert!(matches!(CommandError::from(LibraryError::network("x")), CommandError::Network { .. }));
        assert_eq!("Book with ISBN 1 already exists",
                   CommandError::from(LibraryError::duplicate_key("Book with ISBN 1 already exists")).to_string());
    }
}
