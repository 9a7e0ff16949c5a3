//! Read-only site content plus its precomputed affiliation grid.

use std::sync::Arc;

use folio::{GridSlotAssignment, SiteContent};

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// Content shared by every component.
///
/// The grid is placed once here so the compact and expanded sidebars render
/// the same assignment.
#[derive(Clone, Debug)]
pub struct SiteState {
    pub content: Arc<SiteContent>,
    pub grid: Arc<GridSlotAssignment>,
}

impl SiteState {
    pub fn new(content: SiteContent) -> Self {
        let grid = content.affiliation_grid();
        Self { content: Arc::new(content), grid: Arc::new(grid) }
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new(SiteContent::default())
    }
}
