//! NIC codec errors
//!
//! Only the strict tier (`normalize`, `decode_checked`, `Nic::parse`)
//! returns these. The lenient tier collapses them into sentinels.

use std::fmt;

use thiserror::Error;

/// The structural check that rejected a NIC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatViolation {
    /// Cleaned input was not 9, 10 or 12 characters long
    Length(usize),
    /// A position that must hold a digit held something else
    NonDigit,
}

impl fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatViolation::Length(len) => {
                write!(f, "expected 9, 10 or 12 characters, found {len}")
            }
            FormatViolation::NonDigit => write!(f, "digits part is invalid"),
        }
    }
}

/// Errors that can occur while normalizing or decoding a NIC
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NicError {
    /// Wrong length or non-digit content
    #[error("Invalid NIC format: {0}")]
    InvalidFormat(FormatViolation),

    /// The tenth character of a legacy number is not `V` or `X`
    #[error("Invalid NIC format: letter must be V or X, found '{0}'")]
    InvalidLetter(char),

    /// The day-of-year field is outside `[1, 366]` and `[501, 866]`
    #[error("Invalid day of year in NIC: {0}")]
    InvalidDayOfYear(u32),

    /// The decoded birth year is outside the accepted window
    #[error("Invalid birth year in NIC: {0}")]
    BirthYearOutOfRange(i32),
}

impl NicError {
    /// Short machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            NicError::InvalidFormat(FormatViolation::Length(_)) => "INVALID_LENGTH",
            NicError::InvalidFormat(FormatViolation::NonDigit) => "INVALID_DIGITS",
            NicError::InvalidLetter(_) => "INVALID_LETTER",
            NicError::InvalidDayOfYear(_) => "INVALID_DAY_OF_YEAR",
            NicError::BirthYearOutOfRange(_) => "INVALID_BIRTH_YEAR",
        }
    }
}
