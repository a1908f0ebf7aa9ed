//! House-number splitting.
//!
//! Callers commonly write the house number and its addition as a single
//! string: "123a", "123 rood", "123-a", "123 II". [`split`] separates the
//! leading numeric part from the addition so each can travel as its own
//! request path segment.

use regex::Regex;
use std::sync::LazyLock;

/// Anchored house-number pattern: a digit run, then at most one addition
/// tail.
///
/// The tail is either one or more separator characters followed by an
/// alphanumeric run (group 2, separator discarded), or a letter-led
/// alphanumeric run attached directly to the digits (group 3). The
/// separator class excludes alphanumerics, so a letter straight after the
/// digits can only match the attached form.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HOUSE_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)(?:[^0-9a-zA-Z]+([0-9a-zA-Z ]+)|([a-zA-Z][0-9a-zA-Z ]*))?$")
        .expect("valid regex")
});

/// Split a raw house-number string into `(number, addition)`.
///
/// Input that does not match the pattern at all comes back unchanged with
/// an empty addition; the digits-only check in
/// [`LookupRequest`](crate::types::LookupRequest) rejects it there. This
/// function never fails.
///
/// # Examples
/// ```
/// use postcode_nl::house_number::split;
///
/// assert_eq!(split("123a"), ("123".to_string(), "a".to_string()));
/// assert_eq!(split("123 rood"), ("123".to_string(), "rood".to_string()));
/// ```
#[must_use]
pub fn split(raw: &str) -> (String, String) {
    let Some(captures) = HOUSE_NUMBER_PATTERN.captures(raw) else {
        return (raw.to_string(), String::new());
    };

    let number = captures.get(1).map_or(raw, |m| m.as_str());
    let addition = captures
        .get(2)
        .or_else(|| captures.get(3))
        .map_or("", |m| m.as_str());

    (number.to_string(), addition.to_string())
}

/// Whether the string consists of one or more ASCII digits.
#[must_use]
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(number: &str, addition: &str) -> (String, String) {
        (number.to_string(), addition.to_string())
    }

    #[test]
    fn test_split_plain_number() {
        assert_eq!(split("123"), owned("123", ""));
        assert_eq!(split("1"), owned("1", ""));
    }

    #[test]
    fn test_split_space_separator() {
        assert_eq!(split("123 2"), owned("123", "2"));
        assert_eq!(split("123 rood"), owned("123", "rood"));
        assert_eq!(split("123 II"), owned("123", "II"));
    }

    #[test]
    fn test_split_attached_letter() {
        assert_eq!(split("123a"), owned("123", "a"));
        assert_eq!(split("123a4"), owned("123", "a4"));
        assert_eq!(split("123A"), owned("123", "A"));
    }

    #[test]
    fn test_split_punctuation_separator() {
        assert_eq!(split("123-a"), owned("123", "a"));
        assert_eq!(split("123/2"), owned("123", "2"));
        assert_eq!(split("123 - a"), owned("123", "a"));
    }

    #[test]
    fn test_split_unsplittable_returns_input() {
        assert_eq!(split("abc"), owned("abc", ""));
        assert_eq!(split(""), owned("", ""));
        assert_eq!(split("a123"), owned("a123", ""));
        // Trailing separator with nothing after it does not match the
        // pattern, so the whole string is passed through.
        assert_eq!(split("123-"), owned("123-", ""));
    }

    #[test]
    fn test_is_all_digits() {
        assert!(is_all_digits("123"));
        assert!(is_all_digits("0"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("123a"));
        assert!(!is_all_digits("12 3"));
        assert!(!is_all_digits("abc"));
    }
}
