//! Browser bindings for theme resolution and toggle.
//!
//! Reads the preference from `localStorage["theme"]`, falls back to the
//! `prefers-color-scheme` media query, and tags the `<html>` element with a
//! `data-theme` attribute plus a `dark` class. Toggle writes back to
//! `localStorage` and mirrors the value into a `theme` cookie so the server
//! can render the next page load in the right theme before first paint.
//!
//! The server only sees the cookie mirror and an optional client hint, so the
//! shell also carries [`boot_script`]: a blocking inline script that applies
//! the same precedence from `localStorage` and the media query before the
//! body is parsed.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths see an
//! unavailable store and a light environment signal, which keeps server
//! rendering deterministic.

use folio::{
    EnvironmentColorSignal, PreferenceStore, StoreError, THEME_KEY, Theme, ThemePreference, ThemeResolver,
    ThemeSurface,
};

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Attribute on `<html>` that carries the resolved theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query sampled as the environment signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Cookie lifetime for the mirrored preference (one year).
pub const THEME_COOKIE_MAX_AGE_SECS: u32 = 365 * 24 * 60 * 60;

/// `Set-Cookie`-style string written alongside the localStorage value.
pub fn theme_cookie(theme: Theme) -> String {
    format!("{THEME_KEY}={theme}; Path=/; Max-Age={THEME_COOKIE_MAX_AGE_SECS}; SameSite=Lax")
}

/// Inline `<head>` script that settles the theme before first paint.
///
/// Mirrors [`folio::resolve`]: a stored `"dark"` is dark, any other stored
/// value is light, and with nothing stored (or storage disabled) the media
/// query decides.
pub fn boot_script() -> String {
    format!(
        "(function(){{var s=null;try{{s=localStorage.getItem({THEME_KEY:?});}}catch(e){{}}\
         var m=window.matchMedia?window.matchMedia({DARK_SCHEME_QUERY:?}):null;\
         var d=s!==null?s===\"dark\":!!(m&&m.matches);\
         var r=document.documentElement;\
         r.setAttribute({THEME_ATTRIBUTE:?},d?\"dark\":\"light\");\
         r.classList.toggle(\"dark\",d);}})();"
    )
}

/// `localStorage`-backed preference store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get_preference(&self) -> Result<ThemePreference, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let raw = storage
                .get_item(THEME_KEY)
                .map_err(|_| StoreError::Unavailable("localStorage read rejected".to_owned()))?;
            Ok(ThemePreference::parse(raw.as_deref()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable("no browser storage outside hydrate".to_owned()))
        }
    }

    fn set_preference(&mut self, theme: Theme) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let storage = local_storage()?;
            storage
                .set_item(THEME_KEY, theme.as_str())
                .map_err(|_| StoreError::Unavailable("localStorage write rejected".to_owned()))?;

            // Cookie mirror is for the next SSR pass; localStorage stays authoritative.
            if let Some(doc) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            {
                let _ = doc.set_cookie(&theme_cookie(theme));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(StoreError::Unavailable("no browser storage outside hydrate".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_owned()))
}

/// The document's root element as a theme surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn apply_theme(&mut self, theme: Theme) {
        apply(theme);
    }
}

/// Sample `(prefers-color-scheme: dark)` once.
pub fn environment_signal() -> EnvironmentColorSignal {
    #[cfg(feature = "hydrate")]
    {
        let matches = web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|mq| mq.matches());
        EnvironmentColorSignal::from_query(matches)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        EnvironmentColorSignal::default()
    }
}

/// Resolver over the browser store and the current media query.
pub fn resolver() -> ThemeResolver<BrowserStore> {
    ThemeResolver::new(BrowserStore, environment_signal())
}

/// Resolve the starting theme and apply it to `<html>`.
///
/// Returns `true` for dark.
pub fn read_preference() -> bool {
    resolver().resolve_initial_theme(&mut DocumentSurface)
}

/// Theme the server already stamped on `<html>`, if any.
pub fn read_applied() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let value = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute(THEME_ATTRIBUTE))?;
        Some(Theme::from_dark(value == "dark"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Apply the `data-theme` attribute and `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            let classes = el.class_list();
            let _ = if theme.is_dark() { classes.add_1("dark") } else { classes.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    resolver().toggle_theme(current, &mut DocumentSurface)
}
