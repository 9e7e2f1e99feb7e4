use std::env;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const STORAGE_PATH_ENV: &str = "LIBRARY_STORAGE_PATH";
pub const OPEN_LIBRARY_URL_ENV: &str = "LIBRARY_OPEN_LIBRARY_URL";
pub const LOOKUP_TIMEOUT_ENV: &str = "LIBRARY_LOOKUP_TIMEOUT_SECS";
pub const BIND_ADDRESS_ENV: &str = "LIBRARY_BIND_ADDRESS";

const DEFAULT_STORAGE_PATH: &str = "library.json";
const DEFAULT_OPEN_LIBRARY_URL: &str = "https://openlibrary.org";
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub storage_path: PathBuf,
    pub open_library_url: String,
    pub lookup_timeout_secs: u64,
    pub bind_address: String,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            open_library_url: DEFAULT_OPEN_LIBRARY_URL.to_string(),
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // builds config from any key lookup, unset or blank keys keep the default
    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(path) = get(STORAGE_PATH_ENV) {
            config.storage_path = PathBuf::from(path);
        }
        if let Some(url) = get(OPEN_LIBRARY_URL_ENV) {
            config.open_library_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = get(LOOKUP_TIMEOUT_ENV) {
            match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => config.lookup_timeout_secs = n,
                _ => warn!("ignoring invalid {}={}, using {}s", LOOKUP_TIMEOUT_ENV, secs, DEFAULT_LOOKUP_TIMEOUT_SECS),
            }
        }
        if let Some(addr) = get(BIND_ADDRESS_ENV) {
            config.bind_address = addr;
        }
        config
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use crate::core::domain::{Configuration, LOOKUP_TIMEOUT_ENV, OPEN_LIBRARY_URL_ENV, STORAGE_PATH_ENV};

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new();
        assert_eq!(PathBuf::from("library.json"), config.storage_path);
        assert_eq!("https://openlibrary.org", config.open_library_url.as_str());
        assert_eq!(10, config.lookup_timeout_secs);
        assert_eq!("127.0.0.1:8000", config.bind_address.as_str());
    }

    #[tokio::test]
    async fn test_should_override_config_from_lookup() {
        let vars = HashMap::from([
            (STORAGE_PATH_ENV, "/tmp/books.json"),
            (OPEN_LIBRARY_URL_ENV, "http://localhost:9000/"),
            (LOOKUP_TIMEOUT_ENV, "3"),
        ]);
        let config = Configuration::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(PathBuf::from("/tmp/books.json"), config.storage_path);
        assert_eq!("http://localhost:9000", config.open_library_url.as_str());
        assert_eq!(3, config.lookup_timeout_secs);
        assert_eq!("127.0.0.1:8000", config.bind_address.as_str());
    }

    #[tokio::test]
    async fn test_should_ignore_invalid_timeout() {
        let vars = HashMap::from([(LOOKUP_TIMEOUT_ENV, "soon"), (STORAGE_PATH_ENV, "  ")]);
        let config = Configuration::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(10, config.lookup_timeout_secs);
        assert_eq!(PathBuf::from("library.json"), config.storage_path);
    }
}
