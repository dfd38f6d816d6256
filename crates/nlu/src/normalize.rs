//! Text normalization
//!
//! Every classifier downstream works on the normalized form: lowercased,
//! with ASCII punctuation deleted. Characters are removed, not replaced, so
//! "what's" becomes "whats"; whitespace is left untouched. Devanagari text
//! passes through unchanged apart from lowercasing (a no-op for it).

/// Normalize a raw utterance for matching
///
/// Idempotent: normalizing twice yields the same result as once.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}
