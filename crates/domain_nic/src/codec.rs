//! Legacy and modern NIC encodings
//!
//! A legacy number is nine digits plus a series letter:
//!
//! ```text
//!   7 4 1 9 2 2 7 5 7 V
//!   └┬┘ └─┬─┘ └─┬─┘ │ └ series letter (V or X), optional
//!    yy   ddd   sss  c
//! ```
//!
//! `ddd` is the day of the year of birth, plus 500 for women. The modern
//! number widens the year to four digits and adds a structural zero before
//! the serial: `yyyy ddd 0 sss c`.
//!
//! Two call paths are provided. [`normalize`] and [`decode_checked`] are
//! strict and report the reason a number was rejected. [`decode`] is
//! lenient: it never fails and returns a [`NicInfo`] with `is_valid` set to
//! false instead, for auto-fill on every keystroke.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FormatViolation, NicError};
use crate::gender::Gender;

/// Two-digit years at or below this value are in the 2000s
pub const CENTURY_CUTOFF: u32 = 50;

/// Day-of-year offset marking a female holder
pub const FEMALE_DAY_OFFSET: u32 = 500;

/// Earliest accepted birth year
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// How far past the current year a birth year may lie
pub const BIRTH_YEAR_LOOKAHEAD: i32 = 10;

const LEGACY_DIGITS: usize = 9;
const LEGACY_LENGTH: usize = 10;
const MODERN_LENGTH: usize = 12;

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Converts any accepted NIC to the 12-digit modern form.
///
/// Whitespace anywhere in the input is dropped and letters are upper-cased
/// first. Modern numbers are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use domain_nic::normalize;
///
/// assert_eq!(normalize("741922757V").unwrap(), "197419202757");
/// assert_eq!(normalize("74192 2757v").unwrap(), "197419202757");
/// assert_eq!(normalize("197419202757").unwrap(), "197419202757");
/// assert!(normalize("74192275").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String, NicError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    match cleaned.chars().count() {
        MODERN_LENGTH => {
            if all_digits(&cleaned) {
                Ok(cleaned)
            } else {
                Err(NicError::InvalidFormat(FormatViolation::NonDigit))
            }
        }
        LEGACY_LENGTH => {
            let mut chars = cleaned.chars();
            let digits: String = chars.by_ref().take(LEGACY_DIGITS).collect();
            if !all_digits(&digits) {
                return Err(NicError::InvalidFormat(FormatViolation::NonDigit));
            }
            match chars.next() {
                Some('V') | Some('X') => legacy_to_modern(&digits),
                Some(letter) => Err(NicError::InvalidLetter(letter)),
                None => Err(NicError::InvalidFormat(FormatViolation::Length(LEGACY_DIGITS))),
            }
        }
        LEGACY_DIGITS => {
            if all_digits(&cleaned) {
                legacy_to_modern(&cleaned)
            } else {
                Err(NicError::InvalidFormat(FormatViolation::NonDigit))
            }
        }
        len => Err(NicError::InvalidFormat(FormatViolation::Length(len))),
    }
}

/// Re-encodes nine verified ASCII digits in the modern layout
fn legacy_to_modern(digits: &str) -> Result<String, NicError> {
    let parse = |range: std::ops::Range<usize>| -> Result<u32, NicError> {
        digits
            .get(range)
            .and_then(|part| part.parse().ok())
            .ok_or(NicError::InvalidFormat(FormatViolation::NonDigit))
    };

    let yy = parse(0..2)?;
    let ddd = parse(2..5)?;
    let serial = digits
        .get(5..9)
        .ok_or(NicError::InvalidFormat(FormatViolation::NonDigit))?;

    if !is_encoded_day(ddd) {
        return Err(NicError::InvalidDayOfYear(ddd));
    }

    let yyyy = if yy <= CENTURY_CUTOFF { 2000 + yy } else { 1900 + yy };

    // serial carries the three serial digits and the check digit
    Ok(format!("{yyyy}{ddd:03}0{serial}"))
}

/// True for an encoded day in `[1, 366]` or `[501, 866]`
fn is_encoded_day(ddd: u32) -> bool {
    (1..=366).contains(&ddd) || (FEMALE_DAY_OFFSET + 1..=FEMALE_DAY_OFFSET + 366).contains(&ddd)
}

/// Fields decoded from a NIC that passed every check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicDetails {
    /// Normalized 12-digit number
    pub normalized: String,
    pub birth_year: i32,
    /// Day of the year with the gender offset removed
    pub day_of_year: u32,
    pub gender: Gender,
}

/// Lenient decode result
///
/// When `is_valid` is false the numeric fields are zero, `gender` is
/// `None` and `normalized` holds the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicInfo {
    pub birth_year: i32,
    pub day_of_year: u32,
    pub gender: Option<Gender>,
    pub normalized: String,
    pub is_valid: bool,
}

impl NicInfo {
    /// The sentinel returned for an undecodable number
    pub fn invalid(raw: &str) -> Self {
        Self {
            birth_year: 0,
            day_of_year: 0,
            gender: None,
            normalized: raw.to_string(),
            is_valid: false,
        }
    }
}

impl From<NicDetails> for NicInfo {
    fn from(details: NicDetails) -> Self {
        Self {
            birth_year: details.birth_year,
            day_of_year: details.day_of_year,
            gender: Some(details.gender),
            normalized: details.normalized,
            is_valid: true,
        }
    }
}

/// Normalizes and decodes a NIC, reporting why it was rejected.
///
/// On top of the [`normalize`] checks, the birth year must fall in
/// `[1900, today.year + 10]` and the day of year, once the gender offset is
/// removed, must be in `[1, 366]`. The second check matters for modern
/// numbers, which `normalize` passes through untouched.
pub fn decode_checked(raw: &str, today: NaiveDate) -> Result<NicDetails, NicError> {
    let normalized = normalize(raw)?;

    let field = |range: std::ops::Range<usize>| -> Result<u32, NicError> {
        normalized
            .get(range)
            .and_then(|part| part.parse().ok())
            .ok_or(NicError::InvalidFormat(FormatViolation::NonDigit))
    };

    let birth_year = field(0..4)? as i32;
    let encoded_day = field(4..7)?;

    let (day_of_year, gender) = if encoded_day > FEMALE_DAY_OFFSET {
        (encoded_day - FEMALE_DAY_OFFSET, Gender::Female)
    } else {
        (encoded_day, Gender::Male)
    };

    if birth_year < MIN_BIRTH_YEAR || birth_year > today.year() + BIRTH_YEAR_LOOKAHEAD {
        return Err(NicError::BirthYearOutOfRange(birth_year));
    }
    if !(1..=366).contains(&day_of_year) {
        return Err(NicError::InvalidDayOfYear(encoded_day));
    }

    Ok(NicDetails {
        normalized,
        birth_year,
        day_of_year,
        gender,
    })
}

/// Decodes a NIC without failing.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use domain_nic::{decode, Gender};
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let info = decode("916980123V", today);
/// assert!(info.is_valid);
/// assert_eq!(info.birth_year, 1991);
/// assert_eq!(info.day_of_year, 198);
/// assert_eq!(info.gender, Some(Gender::Female));
///
/// let bad = decode("not a nic", today);
/// assert!(!bad.is_valid);
/// assert_eq!(bad.normalized, "not a nic");
/// ```
pub fn decode(raw: &str, today: NaiveDate) -> NicInfo {
    match decode_checked(raw, today) {
        Ok(details) => details.into(),
        Err(err) => {
            tracing::debug!(code = err.code(), reason = %err, "NIC could not be decoded");
            NicInfo::invalid(raw)
        }
    }
}

/// A NIC held in its normalized 12-digit form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nic(String);

impl Nic {
    /// Strictly parses and normalizes a NIC
    pub fn parse(raw: &str) -> Result<Self, NicError> {
        normalize(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the number relative to `today`
    pub fn details(&self, today: NaiveDate) -> Result<NicDetails, NicError> {
        decode_checked(&self.0, today)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Nic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Nic {
    type Err = NicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Nic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Nic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Nic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
