//! Capability wiring for the current build.
//!
//! `hydrate` builds talk to the real browser; every other build (SSR, native
//! tests) gets the headless stand-ins. Components call these constructors
//! instead of naming either adapter set.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

use super::navigation::SectionNavigator;
use super::theme::{Theme, ThemeController};

#[cfg(feature = "hydrate")]
use super::browser::{Document, LocalStorage as Storage, MediaQueries};
#[cfg(not(feature = "hydrate"))]
use super::headless::{DetachedDocument as Document, NoMediaQueries as MediaQueries, NoStorage as Storage};

pub type PlatformThemeController = ThemeController<Storage, MediaQueries, Document>;
pub type PlatformNavigator = SectionNavigator<Document, MediaQueries>;

/// Controller bound to the current document, holding the default theme.
pub fn theme_controller() -> PlatformThemeController {
    ThemeController::new(Storage::current(), MediaQueries::current(), Document::current())
}

/// Controller bound to the current document, continuing from `active`.
pub fn resume_theme(active: Theme) -> PlatformThemeController {
    ThemeController::resume(Storage::current(), MediaQueries::current(), Document::current(), active)
}

pub fn section_navigator() -> PlatformNavigator {
    SectionNavigator::new(Document::current(), MediaQueries::current())
}
