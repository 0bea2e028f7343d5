//! Log sanitization utilities
//!
//! Keeps API response bodies and credential identifiers from being written
//! to logs in full.

/// Maximum number of bytes of a response body kept in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters left visible by [`mask_secret`].
const MASK_VISIBLE: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Truncate a response body for logging.
///
/// Bodies up to `TRUNCATE_LIMIT` bytes are returned unchanged; longer ones are cut on
/// a char boundary and suffixed with the original length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
        s.len()
    )
}

/// Mask a key or token, leaving only its first few characters.
///
/// Short values are masked entirely.
pub fn mask_secret(s: &str) -> String {
    if s.chars().count() <= MASK_VISIBLE * 2 {
        return "****".to_string();
    }
    let visible: String = s.chars().take(MASK_VISIBLE).collect();
    format!("{visible}****")
}
