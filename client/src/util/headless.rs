//! Capability stand-ins for contexts without a browser window.
//!
//! Used by the SSR render: nothing is stored, no preference is known, and
//! document writes are dropped, so the server always renders `light`.

use super::env::{
    EnvironmentProbe, KeyValueStore, ScrollBehavior, SectionViewport, StorageError, SurfaceNode, ThemeSurface,
};

/// Store that does not exist.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStorage;

impl NoStorage {
    pub fn current() -> Self {
        Self
    }
}

impl KeyValueStore for NoStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Environment with no media query support.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMediaQueries;

impl NoMediaQueries {
    pub fn current() -> Self {
        Self
    }
}

impl EnvironmentProbe for NoMediaQueries {
    fn prefers_dark_scheme(&self) -> Option<bool> {
        None
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        None
    }
}

/// Document that is not attached to anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedDocument;

impl DetachedDocument {
    pub fn current() -> Self {
        Self
    }
}

impl ThemeSurface for DetachedDocument {
    fn set_dark_flag(&self, _node: SurfaceNode, _enabled: bool) {}

    fn set_color_scheme(&self, _token: &str) {}
}

impl SectionViewport for DetachedDocument {
    type Element = ();

    fn element_by_id(&self, _id: &str) -> Option<()> {
        None
    }

    fn scroll_to_start(&self, _element: &(), _behavior: ScrollBehavior) {}
}
