//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clipboard,
//! file reading, clock, theme application) from component logic to improve
//! reuse and testability.

pub mod clipboard;
pub mod clock;
pub mod file_read;
pub mod storage;
pub mod theme;
