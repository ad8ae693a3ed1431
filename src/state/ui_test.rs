use super::*;

#[test]
fn ui_state_default_is_light_without_query() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(state.search_query.is_empty());
}

#[test]
fn with_theme_keeps_query_empty() {
    let state = UiState::with_theme(Theme::Dark);
    assert_eq!(state.theme, Theme::Dark);
    assert!(state.search_query.is_empty());
}

#[test]
fn clear_search_resets_query_only() {
    let mut state = UiState {
        theme: Theme::Dark,
        search_query: "abril".to_owned(),
    };
    state.clear_search();
    assert_eq!(state, UiState::with_theme(Theme::Dark));
}
