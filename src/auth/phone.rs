//! Phone number validation.

use regex::Regex;
use std::sync::OnceLock;

/// Optional leading plus, first digit 1-9, then 7 to 14 more digits.
fn phone_re() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    PHONE_RE.get_or_init(|| Regex::new(r"^\+?[1-9][0-9]{7,14}$").expect("phone pattern compiles"))
}

/// Check a free-text phone number.
///
/// Whitespace is removed first; nothing else is normalized, so dashes,
/// brackets or a plus anywhere but the front make the number invalid.
pub fn is_valid_phone(input: &str) -> bool {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    phone_re().is_match(&compact)
}
