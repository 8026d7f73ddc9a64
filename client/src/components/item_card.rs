//! A single portfolio entry.

use leptos::prelude::*;

use crate::content::PortfolioItem;

fn chips(class: &'static str, values: &'static [&'static str]) -> impl IntoView {
    (!values.is_empty()).then(|| {
        view! {
            <ul class=class>
                {values.iter().map(|value| view! { <li>{*value}</li> }).collect_view()}
            </ul>
        }
    })
}

#[component]
pub fn ItemCard(item: &'static PortfolioItem) -> impl IntoView {
    view! {
        <article class="item">
            <div class="item__heading">
                <h3 class="item__title">{item.title}</h3>
                {item.timeframe.map(|timeframe| view! { <span class="item__timeframe">{timeframe}</span> })}
            </div>
            {item.subtitle.map(|subtitle| view! { <p class="item__subtitle">{subtitle}</p> })}
            {item.location.map(|location| view! { <p class="item__location">{location}</p> })}
            {item.summary.map(|summary| view! { <p class="item__summary">{summary}</p> })}
            {(!item.bullets.is_empty()).then(|| {
                view! {
                    <ul class="item__bullets">
                        {item.bullets.iter().map(|bullet| view! { <li>{*bullet}</li> }).collect_view()}
                    </ul>
                }
            })}
            {chips("item__metrics", item.metrics)}
            {chips("item__tags", item.tags)}
            {item.link.map(|link| {
                view! {
                    <a class="item__link" href=link.url target="_blank" rel="noopener noreferrer">
                        {link.label}
                    </a>
                }
            })}
        </article>
    }
}
