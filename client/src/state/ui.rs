//! Visitor-controlled UI state.
//!
//! DESIGN
//! ======
//! The theme lives here as an explicit value passed through context rather
//! than being read back from the document. Components render from this
//! state; `util::dark_mode` keeps the document and storage in step with it.

use folio::Theme;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_menu_open: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, mobile_menu_open: false }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Record the result of a toggle (`is_dark` of the new theme).
    pub fn set_dark(&mut self, is_dark: bool) {
        self.theme = Theme::from_dark(is_dark);
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
