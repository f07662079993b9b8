//! URL slug derivation.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Lowercase `title`, collapse every run of non-alphanumeric characters into a
/// single hyphen, and trim hyphens from both ends.
///
/// Pure and deterministic; uniqueness is the store's concern.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}
