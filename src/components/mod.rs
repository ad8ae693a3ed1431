//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the feed chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod compose_modal;
pub mod emoji_picker;
pub mod feed;
pub mod post_card;
pub mod toolbar;
