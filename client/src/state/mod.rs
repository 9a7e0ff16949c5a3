//! Client application state.
//!
//! ARCHITECTURE
//! ============
//! State is plain data wrapped in `RwSignal` and provided via Leptos context.
//! `site` is read-only content fixed at render time; `ui` holds the few
//! values the visitor can change (theme, mobile menu).

pub mod site;
pub mod ui;
