//! Page header: identity, contact details, social links and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::{Profile, SocialLink};

#[component]
pub fn ProfileHeader(profile: Profile, social_links: &'static [SocialLink]) -> impl IntoView {
    let mailto = format!("mailto:{}", profile.email);
    let website_href = website_href(profile.website);

    view! {
        <header class="profile">
            <div class="profile__identity">
                <h1 class="profile__name">{profile.name}</h1>
                <p class="profile__title">{profile.title}</p>
            </div>
            <div class="profile__contact">
                <a class="profile__email" href=mailto>{profile.email}</a>
                <a class="profile__website" href=website_href target="_blank" rel="noopener noreferrer">
                    {profile.website}
                </a>
            </div>
            <ul class="profile__social">
                {social_links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.url target="_blank" rel="noopener noreferrer">{link.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <ThemeToggle/>
        </header>
    }
}

/// Bare hostnames get an `https://` prefix so the link leaves the site.
pub(crate) fn website_href(website: &str) -> String {
    if website.starts_with("http://") || website.starts_with("https://") {
        website.to_owned()
    } else {
        format!("https://{website}")
    }
}
