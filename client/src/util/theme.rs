//! Light/dark theme resolution, toggle and persistence.
//!
//! The initial theme comes from `localStorage`, then the system
//! `prefers-color-scheme` query, then `light`. Every change is mirrored onto
//! the `<html>`/`<body>` `dark` class and the root `color-scheme` hint, and
//! written back to storage.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is a best-effort cache. Storage failures are swallowed by the
//! public operations; `try_persist` and `stored_theme` keep the typed result
//! for callers that want to observe it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use super::env::{EnvironmentProbe, KeyValueStore, StorageError, SurfaceNode, ThemeSurface};

/// Fixed `localStorage` key holding the theme token.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Active presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal token used in storage and the `color-scheme` hint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme token: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    /// Exact match only; `"Dark"` or `" dark"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Where the initial theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    Ambient,
    Default,
}

/// Owns the active theme and the collaborators it is mirrored to.
pub struct ThemeController<S, E, D> {
    store: S,
    env: E,
    surface: D,
    active: Theme,
}

impl<S, E, D> ThemeController<S, E, D>
where
    S: KeyValueStore,
    E: EnvironmentProbe,
    D: ThemeSurface,
{
    /// Controller with the default theme; call [`Self::initialize`] before use.
    pub fn new(store: S, env: E, surface: D) -> Self {
        Self::resume(store, env, surface, Theme::default())
    }

    /// Controller around a theme resolved earlier (e.g. held in a signal).
    /// Nothing is applied until the next transition.
    pub fn resume(store: S, env: E, surface: D, active: Theme) -> Self {
        Self { store, env, surface, active }
    }

    pub fn active(&self) -> Theme {
        self.active
    }

    /// Resolve the initial theme, apply it, and return it.
    pub fn initialize(&mut self) -> Theme {
        let (theme, source) = self.resolve_initial();
        log::debug!("theme resolved: {theme} ({source:?})");
        self.apply(theme);
        theme
    }

    /// Stored token, else ambient preference, else `light`. No side effects.
    pub fn resolve_initial(&self) -> (Theme, ThemeSource) {
        if let Ok(Some(theme)) = self.stored_theme() {
            return (theme, ThemeSource::Stored);
        }
        match self.env.prefers_dark_scheme() {
            Some(true) => (Theme::Dark, ThemeSource::Ambient),
            Some(false) => (Theme::Light, ThemeSource::Ambient),
            None => (Theme::Light, ThemeSource::Default),
        }
    }

    /// Flip the active theme, apply it, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.active.toggled();
        self.apply(next);
        next
    }

    /// Make `theme` active, mirror it onto the document, and persist it.
    pub fn apply(&mut self, theme: Theme) {
        self.active = theme;
        for node in SurfaceNode::ALL {
            self.surface.set_dark_flag(node, theme.is_dark());
        }
        self.surface.set_color_scheme(theme.as_str());
        self.persist(theme);
    }

    /// Best-effort write of `theme`; failures are ignored.
    pub fn persist(&self, theme: Theme) {
        let _ = self.try_persist(theme);
    }

    /// Write `theme` under [`STORAGE_KEY`].
    ///
    /// # Errors
    ///
    /// Returns the store's [`StorageError`] unchanged.
    pub fn try_persist(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(STORAGE_KEY, theme.as_str())
    }

    /// Stored theme, if a valid token is present. Invalid tokens read as `None`.
    ///
    /// # Errors
    ///
    /// Returns the store's [`StorageError`] unchanged.
    pub fn stored_theme(&self) -> Result<Option<Theme>, StorageError> {
        let raw = self.store.get(STORAGE_KEY)?;
        Ok(raw.and_then(|token| token.parse().ok()))
    }
}
