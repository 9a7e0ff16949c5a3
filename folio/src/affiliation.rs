//! Affiliation logo placement on the fixed 3×3 sidebar grid.
//!
//! Slots are numbered row-major:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! A record goes to its `preferred_slot` when it has one, otherwise to its
//! position in the input sequence. Out-of-range targets are dropped and a
//! later record overwrites an earlier one on the same slot.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

#[cfg(test)]
#[path = "affiliation_test.rs"]
mod affiliation_test;

/// Number of slots in the grid.
pub const GRID_SLOTS: usize = 9;
/// Number of columns (and rows) in the grid.
pub const GRID_COLUMNS: usize = 3;

const DARK_LOGO_BACKGROUND: &str = "background=262626";
const LIGHT_LOGO_BACKGROUND: &str = "background=f5f5f5";

/// One institutional affiliation shown as a logo in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliationRecord {
    pub id: String,
    pub name: String,
    /// Opaque image locator.
    pub logo_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Requested grid slot, expected in `0..9`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_slot: Option<i32>,
}

impl AffiliationRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, logo_reference: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo_reference: logo_reference.into(),
            link_url: None,
            preferred_slot: None,
        }
    }

    #[must_use]
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_slot(mut self, slot: i32) -> Self {
        self.preferred_slot = Some(slot);
        self
    }

    /// Link target for the logo; `#` when none is configured.
    #[must_use]
    pub fn href(&self) -> &str {
        self.link_url.as_deref().unwrap_or("#")
    }
}

/// Final mapping of records to the nine display positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridSlotAssignment {
    slots: [Option<AffiliationRecord>; GRID_SLOTS],
}

impl GridSlotAssignment {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record at `slot`, or `None` for an empty or out-of-range slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&AffiliationRecord> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<AffiliationRecord>; GRID_SLOTS] {
        &self.slots
    }

    /// All nine slots in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&AffiliationRecord>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// The grid as three rows of three.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<AffiliationRecord>]> {
        self.slots.chunks(GRID_COLUMNS)
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Slot holding the record with `id`, if it survived placement.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|record| record.id == id))
    }
}

/// Target slot for the record at `index` in the input sequence.
///
/// This is the raw target; it may fall outside the grid.
#[must_use]
pub fn default_slot(record: &AffiliationRecord, index: usize) -> i64 {
    match record.preferred_slot {
        Some(slot) => i64::from(slot),
        None => i64::try_from(index).unwrap_or(i64::MAX),
    }
}

/// Place `records` on the grid.
///
/// Never fails: out-of-range targets are dropped and collisions resolve to
/// the record that comes later in `records`.
#[must_use]
pub fn place_in_grid(records: &[AffiliationRecord]) -> GridSlotAssignment {
    let mut grid = GridSlotAssignment::empty();
    for (index, record) in records.iter().enumerate() {
        let target = default_slot(record, index);
        let Some(slot) = usize::try_from(target).ok().filter(|slot| *slot < GRID_SLOTS) else {
            tracing::debug!(id = %record.id, target, "affiliation slot out of range; dropped");
            continue;
        };
        if let Some(previous) = grid.slots[slot].replace(record.clone()) {
            tracing::debug!(slot, replaced = %previous.id, by = %record.id, "affiliation slot collision");
        }
    }
    grid
}

/// Logo URL adjusted for the active theme.
///
/// Placeholder avatars are authored against the dark sidebar background; in
/// light mode that background parameter is swapped for the light one.
#[must_use]
pub fn themed_logo_url(url: &str, theme: Theme) -> String {
    match theme {
        Theme::Dark => url.to_owned(),
        Theme::Light => url.replace(DARK_LOGO_BACKGROUND, LIGHT_LOGO_BACKGROUND),
    }
}
