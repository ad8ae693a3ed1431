//! Theme initialization and toggle.
//!
//! Reads the preference from `localStorage` and applies it as a `dark` class
//! on `<body>`. Toggle writes back to `localStorage` and updates that class.
//! Requires a browser environment to have a visible effect.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort: a failed write is logged and the
//! theme still switches for the current session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;
use crate::util::storage::{KeyValueStore, load_theme, save_theme};

/// Class toggled on `<body>` while the dark theme is active.
#[cfg(feature = "csr")]
const DARK_CLASS: &str = "dark";

/// Read the persisted theme preference, defaulting to light.
pub fn read_preference(storage: &impl KeyValueStore) -> Theme {
    load_theme(storage)
}

/// Apply `theme` to the document body.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if let Err(err) = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
            log::warn!("failed to apply {} theme: {err:?}", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("{} theme not applied outside the browser", theme.as_str());
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme, storage: &mut impl KeyValueStore) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(err) = save_theme(storage, next) {
        log::warn!("failed to persist {} theme: {err}", next.as_str());
    }
    next
}
