//! One content section with its keyed item list.

use leptos::prelude::*;

use crate::components::item_card::ItemCard;
use crate::content::{PortfolioSection, item_key};

/// `accent` is the palette token assigned to this section's position.
#[component]
pub fn SectionPanel(section: &'static PortfolioSection, accent: &'static str) -> impl IntoView {
    view! {
        <section id=section.id class=format!("section section--{accent}")>
            <header class="section__header">
                <h2 class="section__title">{section.title}</h2>
                <p class="section__blurb">{section.blurb}</p>
            </header>
            <div class="section__items">
                <For
                    each=move || section.items.iter()
                    key=|item| item_key(item)
                    children=|item| view! { <ItemCard item=item/> }
                />
            </div>
        </section>
    }
}
