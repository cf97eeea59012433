//! Phone number normalization.

use serde::Serialize;
use std::fmt;

use crate::error::PhoneError;

pub const MIN_DIGITS: usize = 10;
pub const MAX_DIGITS: usize = 15;

/// A phone number reduced to `+<digits>`, 10 to 15 digits long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Strip everything but digits and check the length.
    ///
    /// Only the empty string is missing; whitespace is an invalid number.
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        if raw.is_empty() {
            return Err(PhoneError::Missing);
        }

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(PhoneError::Invalid { digits: digits.len() });
        }

        Ok(Self(format!("+{}", digits)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answer of the verify-phone operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneVerification {
    pub valid: bool,
    pub formatted: Option<PhoneNumber>,
    pub message: String,
}

impl PhoneVerification {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            formatted: None,
            message: "Invalid phone number format".to_string(),
        }
    }
}

/// Validate `raw` without failing on a bad format.
///
/// Only an empty input is an error.
pub fn verify_phone(raw: &str) -> Result<PhoneVerification, PhoneError> {
    match PhoneNumber::parse(raw) {
        Ok(number) => Ok(PhoneVerification {
            valid: true,
            formatted: Some(number),
            message: "Phone number is valid".to_string(),
        }),
        Err(PhoneError::Invalid { .. }) => Ok(PhoneVerification::invalid()),
        Err(PhoneError::Missing) => Err(PhoneError::Missing),
    }
}
