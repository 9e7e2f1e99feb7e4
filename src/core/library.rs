use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    InvalidIdentifier {
        message: String,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    // The metadata service answered with a bad status (anything but 404) or an
    // unusable body.
    Remote {
        message: String,
        status: Option<u16>,
    },
    // Transport level failure: DNS, connect, timeout, reset.
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

impl LibraryError {
    pub fn invalid_identifier(message: &str) -> LibraryError {
        LibraryError::InvalidIdentifier { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn remote(message: &str, status: Option<u16>) -> LibraryError {
        LibraryError::Remote { message: message.to_string(), status }
    }

    pub fn network(message: &str) -> LibraryError {
        LibraryError::Network { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // classifies a failed http exchange with the metadata service
    pub fn from_status(message: &str, status: u16) -> LibraryError {
        if status == 404 {
            LibraryError::not_found(format!("{} not found", message).as_str())
        } else {
            LibraryError::remote(
                format!("{} failed with status {}", message, status).as_str(), Some(status))
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::InvalidIdentifier { message } => { message.as_str() }
            LibraryError::NotFound { message } => { message.as_str() }
            LibraryError::DuplicateKey { message } => { message.as_str() }
            LibraryError::Remote { message, .. } => { message.as_str() }
            LibraryError::Network { message } => { message.as_str() }
            LibraryError::Validation { message, .. } => { message.as_str() }
            LibraryError::Serialization { message } => { message.as_str() }
            LibraryError::Runtime { message, .. } => { message.as_str() }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io error {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LibraryError::from_status(
                err.url().map(|u| u.to_string()).unwrap_or_default().as_str(), status.as_u16())
        } else if err.is_decode() {
            LibraryError::remote(format!("invalid response body {}", err).as_str(), None)
        } else {
            LibraryError::network(format!("network error {}", err).as_str())
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidIdentifier { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Remote { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Network { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write_with_code(f, message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write_with_code(f, message, reason_code)
            }
        }
    }
}

fn write_with_code(f: &mut Formatter<'_>, message: &str, reason_code: &Option<String>) -> fmt::Result {
    match reason_code {
        Some(code) => write!(f, "{} ({})", message, code),
        None => write!(f, "{}", message),
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;
