//! Form-field validators for registration input.
//!
//! Phone number and country code are optional fields: empty input is
//! accepted, non-empty input must match the backend's expected format.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::InvalidInputError;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").unwrap());
static COUNTRY_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+\d{1,4}$").unwrap());

/// Validate a phone number.
///
/// Non-digit characters are ignored; what remains must be exactly ten
/// digits. Empty input is valid (the field is optional).
pub fn validate_phone(phone: &str) -> Result<(), InvalidInputError> {
    if phone.trim().is_empty() {
        return Ok(());
    }

    let cleaned: String = phone.chars().filter(char::is_ascii_digit).collect();
    if PHONE_RE.is_match(&cleaned) {
        Ok(())
    } else {
        Err(InvalidInputError::Phone {
            reason: "Please enter exactly 10 digits for phone number".to_string(),
        })
    }
}

/// Validate a country code: `+` followed by one to four digits.
///
/// Empty input is valid (the field is optional).
pub fn validate_country_code(code: &str) -> Result<(), InvalidInputError> {
    if code.trim().is_empty() {
        return Ok(());
    }

    if COUNTRY_CODE_RE.is_match(code.trim()) {
        Ok(())
    } else {
        Err(InvalidInputError::CountryCode {
            reason: "Please enter a valid country code (e.g., +91, +1, +44)".to_string(),
        })
    }
}

/// Normalize raw phone input: digits only, at most ten of them.
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(10)
        .collect()
}

/// Normalize raw country code input: `+` and digits only, the `+`
/// forced to the front, at most five characters total.
pub fn sanitize_country_code(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if kept.is_empty() {
        return kept;
    }

    let digits: String = kept.chars().filter(char::is_ascii_digit).collect();
    let mut out = String::from("+");
    out.push_str(&digits);
    out.truncate(5);
    out
}
