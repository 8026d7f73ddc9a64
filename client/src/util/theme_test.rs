use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::*;

// =============================================================
// Fakes
// =============================================================

#[derive(Clone, Default)]
struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    fn value(&self) -> Option<String> {
        self.entries.borrow().get(STORAGE_KEY).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Denied("SecurityError".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Denied("QuotaExceededError".into()))
    }
}

struct Ambient(Option<bool>);

impl EnvironmentProbe for Ambient {
    fn prefers_dark_scheme(&self) -> Option<bool> {
        self.0
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        None
    }
}

#[derive(Clone, Default)]
struct RecordingSurface {
    flags: Rc<RefCell<HashMap<SurfaceNode, bool>>>,
    scheme: Rc<RefCell<Option<String>>>,
}

impl RecordingSurface {
    fn flag(&self, node: SurfaceNode) -> Option<bool> {
        self.flags.borrow().get(&node).copied()
    }

    fn scheme(&self) -> Option<String> {
        self.scheme.borrow().clone()
    }

    fn assert_matches(&self, theme: Theme) {
        assert_eq!(self.flag(SurfaceNode::Root), Some(theme.is_dark()));
        assert_eq!(self.flag(SurfaceNode::Body), Some(theme.is_dark()));
        assert_eq!(self.scheme().as_deref(), Some(theme.as_str()));
    }
}

impl ThemeSurface for RecordingSurface {
    fn set_dark_flag(&self, node: SurfaceNode, enabled: bool) {
        self.flags.borrow_mut().insert(node, enabled);
    }

    fn set_color_scheme(&self, token: &str) {
        *self.scheme.borrow_mut() = Some(token.to_owned());
    }
}

fn controller(
    store: MemoryStore,
    ambient: Option<bool>,
) -> (ThemeController<MemoryStore, Ambient, RecordingSurface>, RecordingSurface) {
    let surface = RecordingSurface::default();
    (ThemeController::new(store, Ambient(ambient), surface.clone()), surface)
}

// =============================================================
// Theme tokens
// =============================================================

#[test]
fn theme_tokens_parse_exactly() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".into())));
    assert!(" dark".parse::<Theme>().is_err());
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn theme_display_matches_token() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_prefers_stored_light_over_ambient_dark() {
    let (mut ctl, surface) = controller(MemoryStore::with(STORAGE_KEY, "light"), Some(true));
    assert_eq!(ctl.initialize(), Theme::Light);
    assert_eq!(ctl.active(), Theme::Light);
    surface.assert_matches(Theme::Light);
}

#[test]
fn initialize_prefers_stored_dark_over_ambient_light() {
    let (mut ctl, _) = controller(MemoryStore::with(STORAGE_KEY, "dark"), Some(false));
    assert_eq!(ctl.initialize(), Theme::Dark);
    assert_eq!(ctl.resolve_initial().1, ThemeSource::Stored);
}

#[test]
fn initialize_uses_ambient_dark_without_stored_value() {
    let (mut ctl, surface) = controller(MemoryStore::default(), Some(true));
    assert_eq!(ctl.initialize(), Theme::Dark);
    surface.assert_matches(Theme::Dark);
}

#[test]
fn initialize_uses_ambient_light_without_stored_value() {
    let (ctl, _) = controller(MemoryStore::default(), Some(false));
    assert_eq!(ctl.resolve_initial(), (Theme::Light, ThemeSource::Ambient));
}

#[test]
fn initialize_defaults_to_light_without_ambient_capability() {
    let (mut ctl, _) = controller(MemoryStore::default(), None);
    assert_eq!(ctl.resolve_initial(), (Theme::Light, ThemeSource::Default));
    assert_eq!(ctl.initialize(), Theme::Light);
}

#[test]
fn initialize_ignores_invalid_stored_token() {
    let (mut ctl, _) = controller(MemoryStore::with(STORAGE_KEY, "purple"), Some(true));
    assert_eq!(ctl.initialize(), Theme::Dark);
}

#[test]
fn initialize_ignores_other_keys() {
    let (mut ctl, _) = controller(MemoryStore::with("other-theme", "dark"), None);
    assert_eq!(ctl.initialize(), Theme::Light);
}

#[test]
fn initialize_persists_resolved_theme() {
    let store = MemoryStore::default();
    let (mut ctl, _) = controller(store.clone(), Some(true));
    ctl.initialize();
    assert_eq!(store.value().as_deref(), Some("dark"));
}

#[test]
fn initialize_with_failing_store_falls_back_to_ambient() {
    let surface = RecordingSurface::default();
    let mut ctl = ThemeController::new(FailingStore, Ambient(Some(true)), surface.clone());
    assert_eq!(ctl.initialize(), Theme::Dark);
    surface.assert_matches(Theme::Dark);
}

// =============================================================
// apply / toggle
// =============================================================

#[test]
fn apply_sets_flags_iff_dark() {
    for theme in [Theme::Light, Theme::Dark] {
        let (mut ctl, surface) = controller(MemoryStore::default(), None);
        ctl.apply(theme);
        surface.assert_matches(theme);
        assert_eq!(ctl.active(), theme);
    }
}

#[test]
fn apply_writes_token_to_store() {
    let store = MemoryStore::default();
    let (mut ctl, _) = controller(store.clone(), None);
    ctl.apply(Theme::Dark);
    assert_eq!(store.value().as_deref(), Some("dark"));
    ctl.apply(Theme::Light);
    assert_eq!(store.value().as_deref(), Some("light"));
    assert_eq!(store.writes.get(), 2);
}

#[test]
fn toggle_is_an_involution() {
    for start in [Theme::Light, Theme::Dark] {
        let surface = RecordingSurface::default();
        let mut ctl = ThemeController::resume(MemoryStore::default(), Ambient(None), surface.clone(), start);

        let once = ctl.toggle();
        assert_eq!(once, start.toggled());
        surface.assert_matches(once);

        let twice = ctl.toggle();
        assert_eq!(twice, start);
        surface.assert_matches(twice);
    }
}

#[test]
fn resume_does_not_touch_document_or_store() {
    let store = MemoryStore::default();
    let surface = RecordingSurface::default();
    let ctl = ThemeController::resume(store.clone(), Ambient(None), surface.clone(), Theme::Dark);
    assert_eq!(ctl.active(), Theme::Dark);
    assert_eq!(surface.flag(SurfaceNode::Root), None);
    assert_eq!(store.writes.get(), 0);
}

// =============================================================
// Storage failures
// =============================================================

#[test]
fn failing_store_never_breaks_toggle_or_apply() {
    let surface = RecordingSurface::default();
    let mut ctl = ThemeController::new(FailingStore, Ambient(None), surface.clone());
    assert_eq!(ctl.toggle(), Theme::Dark);
    surface.assert_matches(Theme::Dark);
    ctl.apply(Theme::Light);
    surface.assert_matches(Theme::Light);
    ctl.persist(Theme::Dark);
}

#[test]
fn try_persist_reports_store_failure() {
    let ctl = ThemeController::new(FailingStore, Ambient(None), RecordingSurface::default());
    assert_eq!(
        ctl.try_persist(Theme::Dark),
        Err(StorageError::Denied("QuotaExceededError".into()))
    );
}

#[test]
fn try_persist_succeeds_with_working_store() {
    let (ctl, _) = controller(MemoryStore::default(), None);
    assert_eq!(ctl.try_persist(Theme::Light), Ok(()));
}

#[test]
fn stored_theme_reports_read_failure() {
    let ctl = ThemeController::new(FailingStore, Ambient(None), RecordingSurface::default());
    assert_eq!(ctl.stored_theme(), Err(StorageError::Denied("SecurityError".into())));
}

#[test]
fn stored_theme_reads_invalid_token_as_none() {
    let (ctl, _) = controller(MemoryStore::with(STORAGE_KEY, "sepia"), None);
    assert_eq!(ctl.stored_theme(), Ok(None));
}
