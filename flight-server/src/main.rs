use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flight_server::cache::CachedSearch;
use flight_server::catalog::Catalog;
use flight_server::config::ServerConfig;
use flight_server::session::{FileStore, KeyValueStore, MemoryStore};
use flight_server::store::{InMemoryBookings, InMemoryUsers};
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("flight server stopped: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let catalog = Arc::new(Catalog::seeded(&config.catalog));
    let search = CachedSearch::new(catalog, &config.cache, config.catalog.search_delay());

    let session: Arc<dyn KeyValueStore> = match &config.state_file {
        Some(path) => {
            let store = FileStore::open(path)?;
            info!(path = %store.path().display(), "persisting session state to file");
            Arc::new(store)
        }
        None => Arc::new(MemoryStore::new()),
    };

    let state = AppState::new(
        search,
        InMemoryBookings::new(),
        InMemoryUsers::with_demo_user(),
        session,
        config.prefers_dark,
    );
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "flight server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
