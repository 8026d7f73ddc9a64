//! `web_sys` implementations of the environment capabilities.
//!
//! Only compiled for the `hydrate` build. Every handle is looked up once at
//! construction; a missing window or document degrades to the same answers
//! the headless adapters give.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use super::env::{
    EnvironmentProbe, KeyValueStore, ScrollBehavior, SectionViewport, StorageError, SurfaceNode, ThemeSurface,
};

const DARK_CLASS: &str = "dark";
const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Result<web_sys::Storage, StorageError>,
}

impl LocalStorage {
    pub fn current() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            None | Some(Ok(None)) => Err(StorageError::Unavailable),
            Some(Err(err)) => Err(StorageError::Denied(js_message(&err))),
            Some(Ok(Some(storage))) => Ok(storage),
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().map_err(Clone::clone)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Denied(js_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Denied(js_message(&err)))
    }
}

/// `window.matchMedia` queries.
pub struct MediaQueries {
    window: Option<web_sys::Window>,
}

impl MediaQueries {
    pub fn current() -> Self {
        Self { window: web_sys::window() }
    }

    fn matches(&self, query: &str) -> Option<bool> {
        self.window
            .as_ref()?
            .match_media(query)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
}

impl EnvironmentProbe for MediaQueries {
    fn prefers_dark_scheme(&self) -> Option<bool> {
        self.matches(COLOR_SCHEME_QUERY)
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.matches(REDUCED_MOTION_QUERY)
    }
}

/// The live `document`.
pub struct Document {
    document: Option<web_sys::Document>,
}

impl Document {
    pub fn current() -> Self {
        Self { document: web_sys::window().and_then(|w| w.document()) }
    }

    fn node(&self, node: SurfaceNode) -> Option<web_sys::Element> {
        let doc = self.document.as_ref()?;
        match node {
            SurfaceNode::Root => doc.document_element(),
            SurfaceNode::Body => doc.body().map(Into::into),
        }
    }
}

impl ThemeSurface for Document {
    fn set_dark_flag(&self, node: SurfaceNode, enabled: bool) {
        if let Some(el) = self.node(node) {
            let _ = el.class_list().toggle_with_force(DARK_CLASS, enabled);
        }
    }

    fn set_color_scheme(&self, token: &str) {
        let root = self
            .node(SurfaceNode::Root)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(root) = root {
            let _ = root.style().set_property("color-scheme", token);
        }
    }
}

impl SectionViewport for Document {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.document.as_ref()?.get_element_by_id(id)
    }

    fn scroll_to_start(&self, element: &web_sys::Element, behavior: ScrollBehavior) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Auto,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
