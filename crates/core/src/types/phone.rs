//! Customer phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern for accepted phone numbers: optional `+`, optional leading `1`,
/// then 8-15 digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a compile-time literal
    Regex::new(r"^\+?1?\d{8,15}$").unwrap()
});

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneNumberError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input does not match the accepted pattern.
    #[error("phone number must be 8-15 digits with an optional leading +")]
    InvalidFormat,
}

/// A validated customer phone number.
///
/// ## Constraints
///
/// - Optional leading `+`
/// - Optional country prefix `1`
/// - 8-15 digits, nothing else
///
/// ## Examples
///
/// ```
/// use foodcart_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("+79990001122").is_ok());
/// assert!(PhoneNumber::parse("89990001122").is_ok());
///
/// assert!(PhoneNumber::parse("").is_err());
/// assert!(PhoneNumber::parse("not-a-phone").is_err());
/// assert!(PhoneNumber::parse("+7 999 000 11 22").is_err()); // spaces
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or does not match the
    /// accepted digit pattern.
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        if s.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        if !PHONE_PATTERN.is_match(s) {
            return Err(PhoneNumberError::InvalidFormat);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        for input in ["+79990001122", "79990001122", "89990001122", "12345678"] {
            assert!(PhoneNumber::parse(input).is_ok(), "should accept {input}");
        }
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            PhoneNumber::parse(""),
            Err(PhoneNumberError::Empty)
        ));
    }

    #[test]
    fn test_invalid_format() {
        for input in [
            "phone",
            "1234567",            // too short
            "+7999000112233445",  // too long
            "+7 999 000 11 22",   // spaces
            "+7-999-000-11-22",   // dashes
        ] {
            assert!(
                matches!(
                    PhoneNumber::parse(input),
                    Err(PhoneNumberError::InvalidFormat)
                ),
                "should reject {input}"
            );
        }
    }

    #[test]
    fn test_display_preserves_input() {
        let phone = PhoneNumber::parse("+79990001122").unwrap();
        assert_eq!(phone.to_string(), "+79990001122");
        assert_eq!(phone.as_str(), "+79990001122");
    }
}
