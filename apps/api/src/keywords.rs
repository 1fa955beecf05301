//! Keyword sanitization — turns a human-entered keyword into a storage key.
//!
//! The sanitized key doubles as the URL identifier, so it must be stable:
//! same input always yields the same key, and sanitizing a key again is a
//! no-op.

/// Key used when sanitization removes every character of the input.
pub const FALLBACK_KEY: &str = "generated-post";

/// Derives a storage key from a raw keyword.
///
/// Lowercases, maps spaces to hyphens, drops everything that is not a
/// lowercase ASCII letter, digit, or hyphen, collapses hyphen runs, and
/// strips hyphens from both ends. An input that sanitizes to nothing gets
/// [`FALLBACK_KEY`]. Total and deterministic; never fails.
pub fn sanitize(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    for c in raw.to_lowercase().chars() {
        let c = if c == ' ' { '-' } else { c };
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            continue;
        }
        if c == '-' && key.ends_with('-') {
            continue;
        }
        key.push(c);
    }

    let key = key.trim_matches('-');
    if key.is_empty() {
        FALLBACK_KEY.to_string()
    } else {
        key.to_string()
    }
}

/// Human-readable form of a key: hyphens and underscores become spaces.
/// Used as the display title when a post has no extractable heading.
pub fn humanize(key: &str) -> String {
    key.chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}
