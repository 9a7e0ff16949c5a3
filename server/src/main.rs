mod config;
mod content;
mod request_theme;
mod routes;
mod state;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, DEFAULT_LOG_FILTER, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env is normal outside development.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let result = run().await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "folio server stopped");
    }
    result
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let content = content::load_content(config.content_path.as_deref())?;
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;

    let state = state::AppState::new(conf.leptos_options, content);
    let app = routes::app(state, &config.assets_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "folio listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
