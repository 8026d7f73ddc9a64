//! Portfolio record types and list-rendering keys.
//!
//! DESIGN
//! ======
//! Records borrow `'static` literals so the whole portfolio can live in a
//! `static` and be handed to Leptos views without cloning owned strings.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::HashSet;

/// Owner identity shown in the page header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

/// Label + URL pair used for social links and item links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Optional outbound link attached to a single item.
pub type ItemLink = SocialLink;

/// One entry inside a section (a job, a project, a degree, a skill group).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub timeframe: Option<&'static str>,
    pub location: Option<&'static str>,
    pub summary: Option<&'static str>,
    pub bullets: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub metrics: &'static [&'static str],
    pub link: Option<ItemLink>,
}

impl PortfolioItem {
    /// Item with only a title; the remaining fields are filled with struct
    /// update syntax.
    pub const fn titled(title: &'static str) -> Self {
        Self {
            title,
            subtitle: None,
            timeframe: None,
            location: None,
            summary: None,
            bullets: &[],
            tags: &[],
            metrics: &[],
            link: None,
        }
    }
}

/// Named, ordered group of items. `id` doubles as the navigation anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioSection {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub items: &'static [PortfolioItem],
}

/// Everything the page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub social_links: &'static [SocialLink],
    pub palette: &'static [&'static str],
    pub sections: &'static [PortfolioSection],
}

/// Content invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("duplicate section id: {0}")]
    DuplicateSectionId(&'static str),

    #[error("item {index} in section {section} has an empty title")]
    EmptyItemTitle { section: &'static str, index: usize },
}

impl Portfolio {
    /// Check that section ids are unique and every item has a title.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContentError`] found, in display order.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for section in self.sections {
            if !seen.insert(section.id) {
                return Err(ContentError::DuplicateSectionId(section.id));
            }
            if let Some(index) = section.items.iter().position(|item| item.title.trim().is_empty()) {
                return Err(ContentError::EmptyItemTitle { section: section.id, index });
            }
        }
        Ok(())
    }

    /// Palette token for the section at `index`, rotating through the palette.
    pub fn palette_token(&self, index: usize) -> &'static str {
        if self.palette.is_empty() {
            return "";
        }
        self.palette[index % self.palette.len()]
    }
}

/// Stable list key for a section.
pub fn section_key(section: &PortfolioSection) -> String {
    section.id.to_owned()
}

/// Stable list key for an item: `title-timeframe`, with an empty timeframe
/// when absent. Only unique within one section's list.
pub fn item_key(item: &PortfolioItem) -> String {
    format!("{}-{}", item.title, item.timeframe.unwrap_or(""))
}
