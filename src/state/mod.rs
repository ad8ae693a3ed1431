//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`post`, `feed`, `compose`, `share`, `theme`, `ui`) so
//! components depend on small focused models, all testable without a browser.

pub mod compose;
pub mod feed;
pub mod post;
pub mod share;
pub mod theme;
pub mod ui;
