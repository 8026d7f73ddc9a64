//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio content and page chrome, reading the
//! shared `UiState` from Leptos context.

pub mod item_card;
pub mod profile_header;
pub mod section_nav;
pub mod section_panel;
pub mod theme_toggle;
