//! Per-request theme resolution for SSR.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser mirrors its stored preference into a `theme` cookie and, once
//! asked via `Accept-CH`, reports its color scheme in the
//! `Sec-CH-Prefers-Color-Scheme` client hint. Resolving from those two inputs
//! lets the shell carry the right `data-theme` in the very first response.
//! Browsers that send neither get light here; the shell's head script then
//! corrects it from `localStorage` and the media query before first paint.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue, VARY};
use axum_extra::extract::CookieJar;
use folio::{EnvironmentColorSignal, MemoryStore, ScopeFlag, THEME_KEY, Theme, ThemePreference, ThemeResolver};

#[cfg(test)]
#[path = "request_theme_test.rs"]
mod request_theme_test;

pub const PREFERS_COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";
const ACCEPT_CH: &str = "accept-ch";
const CRITICAL_CH: &str = "critical-ch";

/// Persisted preference carried by the `theme` cookie.
pub fn preference_from_cookies(jar: &CookieJar) -> ThemePreference {
    ThemePreference::parse(jar.get(THEME_KEY).map(|cookie| cookie.value()))
}

/// Environment signal from the color-scheme client hint.
///
/// Hint values are structured-header strings, so `"dark"` arrives quoted.
pub fn signal_from_headers(headers: &HeaderMap) -> EnvironmentColorSignal {
    let matches = headers
        .get(PREFERS_COLOR_SCHEME_HINT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().trim_matches('"').eq_ignore_ascii_case("dark"));
    EnvironmentColorSignal::from_query(matches)
}

/// Resolve the theme the shell should render for this request.
pub fn resolve_request_theme(jar: &CookieJar, headers: &HeaderMap) -> Theme {
    let resolver = ThemeResolver::new(
        MemoryStore::seeded(preference_from_cookies(jar)),
        signal_from_headers(headers),
    );
    let mut flag = ScopeFlag::default();
    let is_dark = resolver.resolve_initial_theme(&mut flag);
    flag.applied().unwrap_or(Theme::from_dark(is_dark))
}

/// Ask the browser to send the color-scheme hint, and mark the response as
/// varying on it and on the cookie.
pub fn advertise_client_hint(headers: &mut HeaderMap) {
    let hint = HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme");
    headers.insert(HeaderName::from_static(ACCEPT_CH), hint.clone());
    headers.insert(HeaderName::from_static(CRITICAL_CH), hint.clone());
    headers.append(VARY, hint);
    headers.append(VARY, HeaderValue::from_static("Cookie"));
}
