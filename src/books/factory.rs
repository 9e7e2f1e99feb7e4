use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonFileBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(JsonFileBookRepository::new(config.storage_path.clone()))
        }
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_create_repositories() {
        let config = Configuration::new();
        assert_eq!("library.json", create_book_repository(&config, RepositoryStore::JsonFile).location());
        assert_eq!("memory", create_book_repository(&config, RepositoryStore::Memory).location());
    }
}
