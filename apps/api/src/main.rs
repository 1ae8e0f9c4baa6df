mod analysis_client;
mod candidates;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod sanitize;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis_client::AnalysisClient;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{CandidateStore, MemoryCandidateStore, PgCandidateStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting candidate intake v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn CandidateStore> = match &config.database_url {
        Some(url) => Arc::new(PgCandidateStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; candidates are kept in memory and lost on restart");
            Arc::new(MemoryCandidateStore::new())
        }
    };

    let analyzer = AnalysisClient::new(
        config.analysis_url.clone(),
        Duration::from_secs(config.analysis_timeout_secs),
    )?;
    info!(
        "Analysis client initialized (endpoint: {}, timeout: {}s)",
        analyzer.endpoint(),
        config.analysis_timeout_secs
    );

    let state = AppState {
        store,
        analyzer: Arc::new(analyzer),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
