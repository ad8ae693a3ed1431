//! Local UI chrome state (theme, search query).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the feed store so the search
//! box can re-filter the feed without ever touching persisted data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::theme::Theme;

/// UI state provided to components as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Display mode currently applied to the document.
    pub theme: Theme,
    /// Live search text; empty shows the whole feed.
    pub search_query: String,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Drop the search filter so the whole feed is visible again.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }
}
