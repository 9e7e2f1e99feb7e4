use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Repository persists the whole ordered sequence of entities at once.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // reads the persisted sequence, missing or corrupt state reads as empty
    async fn read(&self) -> Vec<Entity>;

    // replaces the persisted sequence
    async fn write(&self, entities: &[Entity]) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    Memory,
}
