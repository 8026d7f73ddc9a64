//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::PORTFOLIO;
use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::platform;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides `UiState` and resolves the browser theme once after mount. The
/// server always renders `light`; the stored or system preference is applied
/// as soon as the page hydrates.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Reads nothing reactive, so this runs once after mount.
    Effect::new(move || {
        let theme = platform::theme_controller().initialize();
        ui.update(|u| {
            u.theme = theme;
            u.theme_ready = true;
        });
    });

    let profile = PORTFOLIO.profile;

    view! {
        <Title text=format!("{} | {}", profile.name, profile.title)/>
        <Meta name="description" content=profile.title/>

        <Router>
            <main class="portfolio" class:dark=move || ui.get().is_dark()>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
