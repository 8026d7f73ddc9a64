use super::*;

#[test]
fn ui_state_default_is_light_and_unresolved() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.theme_ready);
    assert!(!state.is_dark());
}

#[test]
fn toggle_label_names_the_other_mode() {
    let light = UiState::default();
    let dark = UiState { theme: Theme::Dark, ..UiState::default() };
    assert_eq!(light.toggle_label(), "Dark mode");
    assert_eq!(dark.toggle_label(), "Light mode");
}

#[test]
fn toggle_icon_follows_theme() {
    let dark = UiState { theme: Theme::Dark, ..UiState::default() };
    assert_eq!(UiState::default().toggle_icon(), "☾");
    assert_eq!(dark.toggle_icon(), "☀");
}
