//! Kiosk application binary - composition root.
//!
//! Ties together the kiosk crates into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Read the FAQ catalog and embed every question up front
//! 3. Assemble the chat engine (embedder, translator, reply selection,
//!    session store, unknown-query log)
//! 4. Start the axum REST API server

mod cli;

use std::sync::Arc;

use clap::Parser;

use kiosk_api::routes;
use kiosk_api::state::AppState;
use kiosk_catalog::Catalog;
use kiosk_chat::{ChatEngine, NoopTranslator, RandomSelector, UnknownLog};
use kiosk_core::config::KioskConfig;
use kiosk_match::HashEmbedder;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config before tracing: the log level may come from the file.
    let config_file = args.resolve_config_path();
    let config = KioskConfig::load_or_default(&config_file);

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Kiosk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Catalog: read the JSON file and embed every question.
    let catalog_path = args.resolve_catalog_path(&config.catalog.path);
    let catalog_json = match std::fs::read_to_string(&catalog_path) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(path = %catalog_path.display(), error = %e, "Failed to read FAQ catalog");
            return Err(e.into());
        }
    };

    let embedder = HashEmbedder::new(config.embedding.dimensions);
    let catalog = Arc::new(Catalog::from_json(&catalog_json, &embedder).await?);
    tracing::info!(
        faq_count = catalog.len(),
        model = %config.embedding.model,
        "FAQ catalog embedded"
    );

    // Engine.
    let unknown_log = UnknownLog::file(&config.logging.unknown_queries);
    let engine = ChatEngine::new(
        catalog,
        Box::new(embedder),
        Box::new(NoopTranslator),
        Box::new(RandomSelector::new()),
        unknown_log,
        &config,
    );

    let state = AppState::new(engine);
    let router = routes::create_router(state);

    // === API server ===

    let port = args.resolve_port(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind; is another instance running?");
            tracing::error!("Try: KIOSK_PORT={} cargo run -p kiosk-app", port + 1);
            return Err(e.into());
        }
    };

    tracing::info!(addr = %addr, "API server listening");

    axum::serve(listener, router).await?;

    Ok(())
}
