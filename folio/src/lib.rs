//! Core decision logic for the folio portfolio site.
//!
//! This crate owns the two places where the site makes a decision rather than
//! projecting data to markup: which theme the page starts in ([`theme`]) and
//! where each affiliation logo sits in the 3×3 sidebar grid ([`affiliation`]).
//! It also owns the site content model ([`content`]) and the preference
//! backends ([`store`]). Nothing here depends on a UI toolkit, so the server,
//! the WASM client, and the CLI all share the same rules.

pub mod affiliation;
pub mod content;
pub mod store;
pub mod theme;

pub use affiliation::{AffiliationRecord, GRID_COLUMNS, GRID_SLOTS, GridSlotAssignment, place_in_grid};
pub use content::SiteContent;
#[cfg(feature = "yaml")]
pub use content::ContentError;
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, UnavailableStore};
pub use theme::{EnvironmentColorSignal, ScopeFlag, THEME_KEY, Theme, ThemePreference, ThemeResolver, ThemeSurface};
