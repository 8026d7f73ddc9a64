//! Static portfolio content and its list-rendering keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content is built once at startup and never mutated. Components read it
//! directly; only the key functions matter for render stability.

pub mod data;
pub mod model;

pub use data::{PORTFOLIO, SECTION_PALETTE};
pub use model::{
    ContentError, ItemLink, Portfolio, PortfolioItem, PortfolioSection, Profile, SocialLink, item_key, section_key,
};
