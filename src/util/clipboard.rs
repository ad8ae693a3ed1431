//! System clipboard access for the share action.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result`; the share control swallows failures (insecure
//! context, permission denied surface as [`ClipboardError::Write`]) after
//! logging them.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Error returned by [`copy_text`].
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No window to copy through (non-browser build).
    #[error("clipboard is not available")]
    Unavailable,
    /// The browser rejected the write.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Write `text` to the system clipboard.
#[allow(clippy::unused_async)]
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|err| ClipboardError::Write(format!("{err:?}")))?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("clipboard unavailable; {} bytes not copied", text.len());
        Err(ClipboardError::Unavailable)
    }
}
