//! Literal, all-occurrences string substitution.
//!
//! The converter treats tags as plain substrings. Every substitution goes
//! through [`replace_all`], which matches `from` byte for byte: tag names and
//! markers are never read as pattern syntax, and `$` in the replacement stays
//! literal.

/// Replace every non-overlapping occurrence of `from` in `haystack` with `to`.
///
/// Matching is literal and left to right. An empty `from` leaves the input
/// untouched.
pub fn replace_all(haystack: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return haystack.to_string();
    }
    haystack.replace(from, to)
}
