//! Field-level input checks shared by repository and presentation.
//!
//! # Responsibility
//! - Decide whether a text field satisfies the non-empty contract.
//! - Decide whether an identity/contact field is ASCII digits only.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));

/// Returns whether the value contains at least one non-whitespace char.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns whether the value is one or more ASCII digits and nothing else.
pub fn is_digits_only(value: &str) -> bool {
    DIGITS_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_digits_only, is_present};

    #[test]
    fn present_rejects_empty_and_whitespace_only() {
        assert!(is_present("Ana"));
        assert!(is_present(" a "));
        assert!(!is_present(""));
        assert!(!is_present("   "));
    }

    #[test]
    fn digits_only_rejects_mixed_and_empty_input() {
        assert!(is_digits_only("12345678901"));
        assert!(!is_digits_only("12a45"));
        assert!(!is_digits_only("123 45"));
        assert!(!is_digits_only("+5511999990000"));
        assert!(!is_digits_only(""));
    }
}
