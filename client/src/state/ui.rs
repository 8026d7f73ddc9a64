//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Holds the reactive copy of the active theme. The theme controller owns the
//! transitions; components only read this and write back what the controller
//! returns.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state provided to components as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Set once the browser-side theme has been resolved and applied.
    pub theme_ready: bool,
}

impl UiState {
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Label for the theme toggle: the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() { "Light mode" } else { "Dark mode" }
    }

    /// Glyph shown on the theme toggle.
    pub fn toggle_icon(&self) -> &'static str {
        if self.is_dark() { "☀" } else { "☾" }
    }
}
