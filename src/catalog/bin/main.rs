use std::path::PathBuf;
use std::sync::Arc;
use clap::Parser;
use tracing::info;
use book_catalog::catalog::controller::build_router;
use book_catalog::catalog::domain::shared;
use book_catalog::catalog::factory::create_catalog_service;
use book_catalog::core::controller::AppState;
use book_catalog::core::domain::Configuration;
use book_catalog::core::library::LibraryError;
use book_catalog::core::repository::RepositoryStore;
use book_catalog::gateway::GatewayPublisherVia;
use book_catalog::metadata::factory::create_resolver;
use book_catalog::utils::logs::setup_tracing;

#[derive(Parser, Debug)]
#[command(name = "catalog-server")]
#[command(about = "HTTP API for the book catalog")]
struct Args {
    /// JSON file holding the catalog
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Base url of the Open Library API
    #[arg(long)]
    open_library_url: Option<String>,

    /// Metadata lookup timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Address to listen on
    #[arg(long)]
    bind: Option<String>,

    /// Emit logs as json lines
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    // flags win over LIBRARY_* environment variables
    fn configuration(&self) -> Configuration {
        let mut config = Configuration::from_env();
        if let Some(path) = &self.storage {
            config.storage_path = path.clone();
        }
        if let Some(url) = &self.open_library_url {
            config.open_library_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = self.timeout.filter(|s| *s > 0) {
            config.lookup_timeout_secs = secs;
        }
        if let Some(addr) = &self.bind {
            config.bind_address = addr.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let args = Args::parse();
    setup_tracing(args.json_logs);
    let config = args.configuration();

    let catalog = create_catalog_service(&config, RepositoryStore::JsonFile, GatewayPublisherVia::Logs).await;
    let resolver = create_resolver(&config)?;
    let state = AppState::new(config.clone(), shared(catalog), Arc::from(resolver));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;
    info!("catalog server listening on {} with storage {}", config.bind_address, config.storage_path.display());
    axum::serve(listener, app).await?;
    Ok(())
}
