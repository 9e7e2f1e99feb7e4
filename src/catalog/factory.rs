use crate::books::factory;
use crate::catalog::domain::{shared, CatalogService, SharedCatalog};
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub async fn create_catalog_service(config: &Configuration, store: RepositoryStore,
                                    via: GatewayPublisherVia) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(config, store);
    let publisher = create_publisher(via);
    Box::new(CatalogServiceImpl::load(book_repo, publisher).await)
}

pub async fn create_memory_catalog() -> SharedCatalog {
    let config = Configuration::new();
    shared(create_catalog_service(&config, RepositoryStore::Memory, GatewayPublisherVia::Memory).await)
}
