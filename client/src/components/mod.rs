//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections while reading shared content and
//! UI state from Leptos context providers.

pub mod affiliation_grid;
pub mod bio_section;
pub mod footer;
pub mod icons;
pub mod nav_links;
pub mod news_section;
pub mod research_section;
pub mod section_heading;
pub mod sidebar;
pub mod social_links;
pub mod theme_toggle;
