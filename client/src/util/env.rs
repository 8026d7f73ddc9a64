//! Capabilities the theme controller and section navigator depend on.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes storage, media queries and the DOM; SSR and native
//! tests do not. Each concern is a trait so the core logic takes its
//! collaborators at construction and never probes the runtime itself.
//! `browser` implements these against `web_sys`, `headless` stands in
//! everywhere else.

/// Durable key-value store access failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No store exists in this context (SSR, disabled storage).
    #[error("storage unavailable")]
    Unavailable,

    /// The store exists but refused the operation (quota, permissions).
    #[error("storage access denied: {0}")]
    Denied(String),
}

/// Origin-scoped synchronous key-value persistence (`localStorage`).
pub trait KeyValueStore {
    /// Read `key`. `Ok(None)` means the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be accessed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be accessed.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read-only ambient preferences. `None` means the environment cannot answer.
pub trait EnvironmentProbe {
    /// `(prefers-color-scheme: dark)`.
    fn prefers_dark_scheme(&self) -> Option<bool>;

    /// `(prefers-reduced-motion: reduce)`.
    fn prefers_reduced_motion(&self) -> Option<bool>;
}

/// Document-level nodes that always exist and carry the theme flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceNode {
    /// `<html>`.
    Root,
    /// `<body>`, the content root.
    Body,
}

impl SurfaceNode {
    pub const ALL: [Self; 2] = [Self::Root, Self::Body];
}

/// Presentation attributes the theme is mirrored onto.
pub trait ThemeSurface {
    /// Add or remove the `dark` class on `node`.
    fn set_dark_flag(&self, node: SurfaceNode, enabled: bool);

    /// Set the `color-scheme` hint on the root element.
    fn set_color_scheme(&self, token: &str);
}

/// Scroll animation mode requested from the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target.
    Instant,
    /// Animated scroll.
    #[default]
    Smooth,
}

impl ScrollBehavior {
    /// Token accepted by `scrollIntoView({ behavior })`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instant => "auto",
            Self::Smooth => "smooth",
        }
    }
}

/// Element lookup and scrolling.
pub trait SectionViewport {
    type Element;

    /// Find the element whose `id` equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Scroll so the element's top edge meets the viewport's top edge.
    fn scroll_to_start(&self, element: &Self::Element, behavior: ScrollBehavior);
}

/// The user action that triggered a navigation.
pub trait NavigationEvent {
    /// Suppress the browser's default handling (the `#anchor` jump).
    fn prevent_default(&self);
}

impl NavigationEvent for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

impl NavigationEvent for web_sys::MouseEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}
