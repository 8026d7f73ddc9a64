//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::platform;

/// Flips the theme through the platform controller and mirrors the result
/// into `UiState`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let current = ui.get_untracked().theme;
        let next = platform::resume_theme(current).toggle();
        ui.update(|u| u.theme = next);
    };

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=on_toggle
            title=move || ui.get().toggle_label()
            aria-label=move || ui.get().toggle_label()
            aria-pressed=move || if ui.get().is_dark() { "true" } else { "false" }
        >
            {move || ui.get().toggle_icon()}
        </button>
    }
}
