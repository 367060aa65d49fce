//! Phone Number Value Object
//!
//! Loosely validated contact number. Accepts an optional leading country
//! prefix and common separators; only the digit count is enforced.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

/// Phone number value object
///
/// Stored as entered (minus surrounding whitespace); validation checks
/// the digits, not the formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new phone number with validation
    pub fn new(phone: impl Into<String>) -> AppResult<Self> {
        let phone = phone.into().trim().to_string();

        if phone.is_empty() {
            return Err(AppError::bad_request("Phone number cannot be empty"));
        }

        let mut chars = phone.chars().peekable();
        if chars.peek() == Some(&'+') {
            chars.next();
        }

        let mut digits = 0usize;
        for c in chars {
            if c.is_ascii_digit() {
                digits += 1;
            } else if !matches!(c, ' ' | '.' | '-' | '(' | ')') {
                return Err(AppError::bad_request("Phone number contains invalid characters"));
            }
        }

        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
            return Err(AppError::bad_request(format!(
                "Phone number must contain {} to {} digits",
                MIN_DIGITS, MAX_DIGITS
            )));
        }

        Ok(Self(phone))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
