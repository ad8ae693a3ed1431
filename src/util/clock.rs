//! Wall-clock helper used for post ids.

/// Milliseconds since the Unix epoch.
///
/// Uses the JS `Date.now()` API in the browser, where `std::time` is not
/// available.
#[must_use]
#[cfg_attr(feature = "csr", allow(clippy::cast_possible_truncation, clippy::cast_sign_loss))]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now().max(0.0) as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }
}
