//! In-page section navigation.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::env::{EnvironmentProbe, NavigationEvent, ScrollBehavior, SectionViewport};

/// What a navigation request ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Scrolled(ScrollBehavior),
    /// No element with that id; nothing happened.
    MissingTarget,
}

/// Scrolls section anchors into view. Holds no state between calls.
pub struct SectionNavigator<V, E> {
    viewport: V,
    env: E,
}

impl<V, E> SectionNavigator<V, E>
where
    V: SectionViewport,
    E: EnvironmentProbe,
{
    pub fn new(viewport: V, env: E) -> Self {
        Self { viewport, env }
    }

    /// Instant when the user asked for reduced motion, smooth otherwise.
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        if self.env.prefers_reduced_motion() == Some(true) {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        }
    }

    /// Suppress the event's default action and scroll `section_id` to the
    /// top of the viewport. A missing id is a no-op.
    pub fn navigate_to(&self, event: &impl NavigationEvent, section_id: &str) -> NavigationOutcome {
        event.prevent_default();
        let Some(target) = self.viewport.element_by_id(section_id) else {
            return NavigationOutcome::MissingTarget;
        };
        let behavior = self.scroll_behavior();
        self.viewport.scroll_to_start(&target, behavior);
        NavigationOutcome::Scrolled(behavior)
    }
}
