//! Postcode normalization and format validation.

use regex::Regex;
use std::sync::LazyLock;

/// Dutch postcode pattern: four digits followed by two letters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static POSTCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}[a-zA-Z]{2}$").expect("valid regex"));

/// Normalize a raw postcode: strip surrounding whitespace and remove
/// internal spaces ("1234 AB" becomes "1234AB").
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().replace(' ', "")
}

/// Check postcode syntax.
///
/// Accepts exactly four digits followed by two letters (either case), no
/// separators. Callers normalize with [`normalize`] first.
///
/// # Examples
/// ```
/// use postcode_nl::postcode::is_valid_format;
///
/// assert!(is_valid_format("2012ES"));
/// assert!(!is_valid_format("2012 ES"));
/// ```
#[must_use]
pub fn is_valid_format(postcode: &str) -> bool {
    POSTCODE_PATTERN.is_match(postcode)
}
