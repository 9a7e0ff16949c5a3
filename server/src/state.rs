//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the Leptos options and the read-only site content. Nothing in it is
//! mutated after startup, so requests never contend.

use axum::extract::FromRef;
use client::state::site::SiteState;
use folio::SiteContent;
use leptos::config::LeptosOptions;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Clone is required by Axum; inner content is `Arc`-wrapped.
#[derive(Clone, Debug)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub site: SiteState,
}

impl AppState {
    pub fn new(leptos_options: LeptosOptions, content: SiteContent) -> Self {
        let site = SiteState::new(content);
        tracing::debug!(occupied = site.grid.occupied_count(), "affiliation grid placed");
        Self { leptos_options, site }
    }
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
