//! The single portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the whole static portfolio. Sections are keyed by id and take
//! their accent from the palette by position.

use leptos::prelude::*;

use crate::components::profile_header::ProfileHeader;
use crate::components::section_nav::SectionNav;
use crate::components::section_panel::SectionPanel;
use crate::content::{PORTFOLIO, Portfolio, section_key};

#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio: &'static Portfolio = &PORTFOLIO;

    view! {
        <ProfileHeader profile=portfolio.profile social_links=portfolio.social_links/>
        <SectionNav sections=portfolio.sections/>
        <div class="sections">
            <For
                each=move || portfolio.sections.iter().enumerate()
                key=|(_, section)| section_key(section)
                children=move |(index, section)| {
                    view! { <SectionPanel section=section accent=portfolio.palette_token(index)/> }
                }
            />
        </div>
        <footer class="footer">
            <p>{portfolio.profile.name}</p>
        </footer>
    }
}
