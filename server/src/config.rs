//! Server configuration parsed from environment variables.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_LOG_FILTER: &str = "info,server=debug,folio=debug";

/// Startup failure. Each variant names what to fix.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`: expected 1-65535")]
    InvalidPort(String),
    #[error(transparent)]
    Content(#[from] folio::ContentError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Optional site content file; built-in content when absent.
    pub content_path: Option<PathBuf>,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FOLIO_CONTENT`: YAML or JSON content file
    /// - `FOLIO_ASSETS_DIR`: default `assets`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] for a non-numeric or zero `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] for a non-numeric or zero `PORT`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            None => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
        };
        let content_path = non_empty(lookup("FOLIO_CONTENT")).map(PathBuf::from);
        let assets_dir = non_empty(lookup("FOLIO_ASSETS_DIR"))
            .map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);

        Ok(Self { port, content_path, assets_dir })
    }

    /// Listen on all interfaces at the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
