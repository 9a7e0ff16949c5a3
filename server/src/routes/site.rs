//! SSR page handler.
//!
//! Resolves the theme from the request, then renders the Leptos shell with
//! that theme and the site content provided as render context.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use client::app::InitialTheme;
use client::state::site::SiteState;
use folio::Theme;
use leptos::prelude::provide_context;

use crate::request_theme::{advertise_client_hint, resolve_request_theme};
use crate::state::AppState;

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// Render the portfolio page for one request.
pub async fn render_page(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    request: Request,
) -> Response {
    let theme = resolve_request_theme(&jar, &headers);
    tracing::debug!(path = %request.uri().path(), %theme, "rendering page");

    let options = state.leptos_options.clone();
    let handler = leptos_axum::render_app_to_stream_with_context(
        page_context(theme, state.site.clone()),
        move || client::app::shell(options.clone()),
    );

    let mut response = handler(request).await.into_response();
    advertise_client_hint(response.headers_mut());
    response
}

/// Render context for one page: the resolved theme and the shared content.
pub fn page_context(theme: Theme, site: SiteState) -> impl Fn() + Clone + Send + Sync + 'static {
    move || {
        provide_context(InitialTheme(theme));
        provide_context(site.clone());
    }
}
