use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::redirect::Policy;
use serde_json::Value;
use tracing::{debug, info};
use crate::core::library::{LibraryError, LibraryResult};
use crate::metadata::domain::{BookMetadata, MetadataResolver};
use crate::utils::isbn::normalize_isbn;

const MAX_REDIRECTS: usize = 10;

// An entry of the "authors" list of an edition record.
#[derive(Debug, PartialEq)]
enum AuthorRef<'a> {
    Name(&'a str),
    Key(&'a str),
}

/// Resolves book metadata through the Open Library JSON API.
///
/// The edition lookup (`/isbn/{isbn}.json`) usually redirects to a
/// `/books/...` record that only references its authors by key, so each
/// referenced author costs one more request. Those secondary requests are
/// best effort: a failing author lookup is skipped, never reported.
#[derive(Debug)]
pub struct OpenLibraryResolver {
    client: Client,
    base_url: String,
}

impl OpenLibraryResolver {
    pub fn new(base_url: &str, timeout: Duration) -> LibraryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("book-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LibraryError::network(format!("failed to create http client {}", e).as_str()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, url: &str) -> LibraryResult<Value> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LibraryError::from_status(url, status.as_u16()));
        }
        Ok(resp.json::<Value>().await?)
    }

    async fn resolve_author(&self, key: &str) -> Option<String> {
        let url = if key.starts_with('/') {
            format!("{}{}.json", self.base_url, key)
        } else {
            format!("{}/{}.json", self.base_url, key)
        };
        match self.get_json(url.as_str()).await {
            Ok(data) => {
                let name = data.get("name").and_then(Value::as_str).and_then(non_blank);
                if name.is_none() {
                    debug!("author {} has no name", key);
                }
                name
            }
            Err(err) => {
                debug!("skipping author {}: {}", key, err);
                None
            }
        }
    }
}

#[async_trait]
impl MetadataResolver for OpenLibraryResolver {
    async fn fetch(&self, identifier: &str) -> LibraryResult<BookMetadata> {
        let isbn = normalize_isbn(identifier)?;
        let url = format!("{}/isbn/{}.json", self.base_url, isbn);
        debug!("looking up {}", url);
        let data = self.get_json(url.as_str()).await?;

        let title = data.get("title").and_then(Value::as_str).and_then(non_blank)
            .ok_or_else(|| LibraryError::remote(format!("record for {} has no title", isbn).as_str(), None))?;

        let mut authors = vec![];
        match data.get("authors") {
            Some(Value::Array(entries)) => {
                for entry in entries {
                    match author_ref(entry) {
                        Some(AuthorRef::Name(name)) => authors.extend(non_blank(name)),
                        Some(AuthorRef::Key(key)) => authors.extend(self.resolve_author(key).await),
                        None => debug!("ignoring author entry {}", entry),
                    }
                }
            }
            Some(Value::String(name)) => authors.extend(non_blank(name)),
            _ => {}
        }
        if authors.is_empty() {
            authors.extend(data.get("by_statement").and_then(Value::as_str).and_then(non_blank));
        }

        let subjects = parse_subjects(data.get("subjects"));
        info!("resolved {} as {:?} by {:?}", isbn, title, authors);
        Ok(BookMetadata { isbn, title, authors, subjects })
    }
}

fn author_ref(entry: &Value) -> Option<AuthorRef<'_>> {
    match entry {
        Value::String(name) => Some(AuthorRef::Name(name)),
        Value::Object(map) => {
            if let Some(Value::String(name)) = map.get("name") {
                Some(AuthorRef::Name(name))
            } else if let Some(Value::String(key)) = map.get("key") {
                Some(AuthorRef::Key(key))
            } else if let Some(Value::Object(author)) = map.get("author") {
                // work records nest the reference as {"author": {"key": ...}}
                author.get("key").and_then(Value::as_str).map(AuthorRef::Key)
            } else {
                None
            }
        }
        _ => None,
    }
}

// subjects may be bare strings or {"name": ...} objects, anything else is dropped
fn parse_subjects(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return vec![];
    };
    items.iter().filter_map(|item| match item {
        Value::String(s) => non_blank(s),
        Value::Object(map) => map.get("name").and_then(Value::as_str).and_then(non_blank),
        _ => None,
    }).collect()
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
