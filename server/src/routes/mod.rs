//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the SSR page, the WASM/CSS bundle under `/pkg`,
//! authored images and files under `/assets`, and a health check.

pub mod site;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Full application router.
pub fn app(state: AppState, assets_dir: &Path) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(state.leptos_options.site_root.as_ref());

    Router::new()
        .leptos_routes_with_handler(routes, site::render_page)
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
