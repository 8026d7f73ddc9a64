//! Anchor links to each content section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links keep real `#id` hrefs so they work before hydration; once hydrated,
//! clicks are intercepted and scrolled by the section navigator, which
//! honours the reduced-motion preference.

use leptos::prelude::*;

use crate::content::{PortfolioSection, section_key};
use crate::util::platform;

#[component]
pub fn SectionNav(sections: &'static [PortfolioSection]) -> impl IntoView {
    view! {
        <nav class="section-nav" aria-label="Sections">
            <For
                each=move || sections.iter()
                key=|section| section_key(section)
                children=move |section| {
                    let id = section.id;
                    view! {
                        <a
                            class="section-nav__link"
                            href=format!("#{id}")
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                let _ = platform::section_navigator().navigate_to(&ev, id);
                            }
                        >
                            {section.title}
                        </a>
                    }
                }
            />
        </nav>
    }
}
