mod config;
mod errors;
mod interview;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, SessionBackend};
use crate::interview::service::InterviewService;
use crate::interview::store::{InMemorySessionStore, RedisSessionStore, SessionStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_session_store(&config)?;
    info!("Session store initialized (backend: {})", store.backend());

    let state = AppState {
        config: config.clone(),
        interviews: Arc::new(InterviewService::new(store)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Interview API stopped");
    Ok(())
}

/// Picks the session backend named by `SESSION_STORE`.
fn build_session_store(config: &Config) -> Result<Arc<dyn SessionStore>> {
    match config.session_backend {
        SessionBackend::Memory => Ok(Arc::new(InMemorySessionStore::new())),
        SessionBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis session store")?;
            let client = redis::Client::open(url).context("invalid REDIS_URL")?;
            Ok(Arc::new(RedisSessionStore::new(
                client,
                config.session_ttl_secs,
            )))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
