use std::cell::{Cell, RefCell};

use super::*;

struct ClickEvent {
    prevented: Cell<bool>,
}

impl ClickEvent {
    fn new() -> Self {
        Self { prevented: Cell::new(false) }
    }
}

impl NavigationEvent for ClickEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

struct Motion(Option<bool>);

impl EnvironmentProbe for Motion {
    fn prefers_dark_scheme(&self) -> Option<bool> {
        None
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.0
    }
}

#[derive(Default)]
struct FakeViewport {
    ids: Vec<&'static str>,
    scrolls: RefCell<Vec<(String, ScrollBehavior)>>,
}

impl FakeViewport {
    fn with_sections() -> Self {
        Self { ids: vec!["experience", "projects", "education", "skills"], ..Self::default() }
    }
}

impl SectionViewport for &FakeViewport {
    type Element = String;

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.ids.iter().find(|known| **known == id).map(|id| (*id).to_owned())
    }

    fn scroll_to_start(&self, element: &String, behavior: ScrollBehavior) {
        self.scrolls.borrow_mut().push((element.clone(), behavior));
    }
}

#[test]
fn missing_target_is_a_silent_noop() {
    let viewport = FakeViewport::with_sections();
    let nav = SectionNavigator::new(&viewport, Motion(Some(false)));
    let event = ClickEvent::new();

    assert_eq!(nav.navigate_to(&event, "missing-id"), NavigationOutcome::MissingTarget);
    assert!(viewport.scrolls.borrow().is_empty());
    assert!(event.prevented.get());
}

#[test]
fn reduced_motion_scrolls_instantly() {
    let viewport = FakeViewport::with_sections();
    let nav = SectionNavigator::new(&viewport, Motion(Some(true)));

    let outcome = nav.navigate_to(&ClickEvent::new(), "experience");
    assert_eq!(outcome, NavigationOutcome::Scrolled(ScrollBehavior::Instant));
    assert_eq!(*viewport.scrolls.borrow(), [("experience".to_owned(), ScrollBehavior::Instant)]);
}

#[test]
fn default_motion_scrolls_smoothly() {
    let viewport = FakeViewport::with_sections();
    let nav = SectionNavigator::new(&viewport, Motion(Some(false)));

    let outcome = nav.navigate_to(&ClickEvent::new(), "experience");
    assert_eq!(outcome, NavigationOutcome::Scrolled(ScrollBehavior::Smooth));
}

#[test]
fn unknown_motion_preference_scrolls_smoothly() {
    let viewport = FakeViewport::with_sections();
    let nav = SectionNavigator::new(&viewport, Motion(None));
    assert_eq!(nav.scroll_behavior(), ScrollBehavior::Smooth);
}

#[test]
fn repeated_navigation_targets_same_element() {
    let viewport = FakeViewport::with_sections();
    let nav = SectionNavigator::new(&viewport, Motion(Some(false)));
    nav.navigate_to(&ClickEvent::new(), "skills");
    nav.navigate_to(&ClickEvent::new(), "skills");

    let scrolls = viewport.scrolls.borrow();
    assert_eq!(scrolls.len(), 2);
    assert_eq!(scrolls[0], scrolls[1]);
}

#[test]
fn scroll_behavior_tokens() {
    assert_eq!(ScrollBehavior::Instant.as_str(), "auto");
    assert_eq!(ScrollBehavior::Smooth.as_str(), "smooth");
}
