use std::sync::Arc;

use clubcal_app::app::api::routes;
use clubcal_app::config::ConfigHandler;
use clubcal_app::datastore_handler::DatastoreHandler;
use clubcal_core::config::{DatabaseConfig, load_config};
use clubcal_db::db::connection::create_pool;
use clubcal_db::db::migrate::run_migrations;
use clubcal_db::db::store::PgStore;
use clubcal_db::fixture::FixtureStore;
use clubcal_db::store::Datastore;
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// Picks the fixture store when a fixture path is configured, otherwise
/// connects to `PostgreSQL` and applies migrations.
async fn open_datastore(database: &DatabaseConfig) -> anyhow::Result<Arc<dyn Datastore>> {
    if let Some(path) = &database.fixture {
        let store = FixtureStore::load(path).await?;
        tracing::info!(path = %path, "Serving feeds from fixture data");
        return Ok(Arc::new(store));
    }

    let Some(url) = &database.url else {
        anyhow::bail!("Either database.url or database.fixture must be configured");
    };

    run_migrations(url).await?;
    let pool = create_pool(url, u32::from(database.max_connections)).await?;

    Ok(Arc::new(PgStore::new(Arc::new(pool))))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting clubcal feed server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = open_datastore(&config.database).await?;

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(DatastoreHandler { store })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!(origin = %config.server.origin(), "Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
