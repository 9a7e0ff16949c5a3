//! Theme preference resolution and toggling.
//!
//! DESIGN
//! ======
//! The starting theme is decided once, synchronously, before anything is
//! painted: a persisted preference wins, otherwise the host's "prefers dark"
//! signal decides. Toggling flips the in-memory value, re-tags the surface,
//! and writes the new value through the [`PreferenceStore`] before returning.
//!
//! Storage failures never surface to the caller. A failed read is treated as
//! "no preference"; a failed write still flips the theme for this session.

use serde::{Deserialize, Serialize};

use crate::store::PreferenceStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key under which the preference is persisted.
pub const THEME_KEY: &str = "theme";

/// Resolved appearance of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Build a theme from the boolean `is_dark` flag used by UI code.
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored / attribute form: `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable user choice, including "never chosen".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Interpret a raw stored value.
    ///
    /// Only `"dark"` selects dark. Any other value that is present still
    /// counts as an explicit choice and selects light, so a stray value never
    /// hands control back to the environment signal.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unset,
            Some("dark") => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    /// The theme this preference pins, or `None` when unset.
    #[must_use]
    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
            Self::Unset => None,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

/// Host-level "prefers dark appearance" indicator, sampled once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvironmentColorSignal {
    prefers_dark: bool,
}

impl EnvironmentColorSignal {
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }

    /// Build from a possibly-unavailable host query; absence reads as light.
    #[must_use]
    pub fn from_query(matches: Option<bool>) -> Self {
        Self::new(matches.unwrap_or(false))
    }

    #[must_use]
    pub fn prefers_dark(self) -> bool {
        self.prefers_dark
    }
}

/// Anything that carries the top-level theme tag.
pub trait ThemeSurface {
    fn apply_theme(&mut self, theme: Theme);
}

/// Headless surface that records the last applied theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScopeFlag {
    applied: Option<Theme>,
}

impl ScopeFlag {
    #[must_use]
    pub fn applied(self) -> Option<Theme> {
        self.applied
    }
}

impl ThemeSurface for ScopeFlag {
    fn apply_theme(&mut self, theme: Theme) {
        self.applied = Some(theme);
    }
}

/// Precedence rule: an explicit preference beats the environment signal.
#[must_use]
pub fn resolve(preference: ThemePreference, signal: EnvironmentColorSignal) -> Theme {
    preference
        .theme()
        .unwrap_or_else(|| Theme::from_dark(signal.prefers_dark()))
}

/// Resolves and persists the theme against one store and one signal.
#[derive(Debug)]
pub struct ThemeResolver<S> {
    store: S,
    signal: EnvironmentColorSignal,
}

impl<S: PreferenceStore> ThemeResolver<S> {
    pub fn new(store: S, signal: EnvironmentColorSignal) -> Self {
        Self { store, signal }
    }

    /// Current stored preference; read failures degrade to `Unset`.
    pub fn stored_preference(&self) -> ThemePreference {
        match self.store.get_preference() {
            Ok(preference) => preference,
            Err(e) => {
                tracing::warn!(error = %e, "theme preference unreadable; falling back to environment");
                ThemePreference::Unset
            }
        }
    }

    /// Decide the starting theme and tag `surface` with it.
    ///
    /// Returns `is_dark`.
    pub fn resolve_initial_theme(&self, surface: &mut impl ThemeSurface) -> bool {
        let preference = self.stored_preference();
        let theme = resolve(preference, self.signal);
        tracing::debug!(?preference, prefers_dark = self.signal.prefers_dark(), %theme, "resolved initial theme");
        surface.apply_theme(theme);
        theme.is_dark()
    }

    /// Flip `current`, tag `surface`, and persist the new value.
    ///
    /// Returns the new `is_dark`. A failed write is logged and otherwise
    /// ignored; the flip still takes effect for this session.
    pub fn toggle_theme(&mut self, current: bool, surface: &mut impl ThemeSurface) -> bool {
        let next = Theme::from_dark(current).opposite();
        surface.apply_theme(next);
        if let Err(e) = self.store.set_preference(next) {
            tracing::warn!(error = %e, theme = %next, "theme preference not persisted");
        }
        next.is_dark()
    }

    pub fn signal(&self) -> EnvironmentColorSignal {
        self.signal
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
