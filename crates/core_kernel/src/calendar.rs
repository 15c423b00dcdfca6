//! Calendar arithmetic for staff records
//!
//! Pure functions used to keep dependent record fields consistent:
//! parsing and formatting display dates, age and years-of-service
//! calculation, retirement date derivation and the recurring annual
//! increment date (`dd-MM`).
//!
//! Nothing in this module reads the wall clock except [`today`]. Every
//! calculation that is relative to "now" takes an explicit `today`
//! reference so callers own the clock and tests can pin it.
//!
//! # Display formats
//!
//! - Display dates are `dd-MM-yyyy` (e.g. `15-06-1970`)
//! - Input dates are `yyyy-MM-dd` (e.g. `1970-06-15`)
//! - Increment dates are `dd-MM` (e.g. `02-03`)

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Default retirement age in years
pub const DEFAULT_RETIREMENT_AGE: u32 = 60;

/// Number of years before retirement during which staff are "near retirement"
pub const NEAR_RETIREMENT_WINDOW: u32 = 5;

/// chrono format string for display dates
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// chrono format string for input dates
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Days per month for an increment date. February is fixed at 29 because
/// no year is attached to a recurring annual date.
const INCREMENT_DAYS_PER_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Errors related to calendar validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date format")]
    InvalidFormat,

    #[error("Date cannot be in the future")]
    FutureDate,

    #[error("Age must be at least {0} years")]
    BelowMinimumAge(u32),

    #[error("Age cannot exceed {0} years")]
    AboveMaximumAge(u32),

    #[error("Increment date is required")]
    MissingIncrementDate,

    #[error("Format must be dd-MM")]
    IncrementDateFormat,

    #[error("Day must be between 1 and 31")]
    DayOutOfRange(u32),

    #[error("Month must be between 1 and 12")]
    MonthOutOfRange(u32),

    #[error("Invalid day for the selected month")]
    DayNotInMonth {
        day: u32,
        month: u32,
    },
}

/// Anything that can be read as a calendar date.
///
/// Lets the derivation functions accept either an already-parsed
/// [`NaiveDate`] or a raw form string. Strings go through [`parse_date`];
/// unparseable strings yield `None`.
pub trait AsCalendarDate {
    fn as_calendar_date(&self) -> Option<NaiveDate>;
}

impl AsCalendarDate for NaiveDate {
    fn as_calendar_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl AsCalendarDate for str {
    fn as_calendar_date(&self) -> Option<NaiveDate> {
        parse_date(self)
    }
}

impl AsCalendarDate for String {
    fn as_calendar_date(&self) -> Option<NaiveDate> {
        parse_date(self)
    }
}

impl<T: AsCalendarDate + ?Sized> AsCalendarDate for &T {
    fn as_calendar_date(&self) -> Option<NaiveDate> {
        (**self).as_calendar_date()
    }
}

impl<T: AsCalendarDate> AsCalendarDate for Option<T> {
    fn as_calendar_date(&self) -> Option<NaiveDate> {
        self.as_ref().and_then(AsCalendarDate::as_calendar_date)
    }
}

/// Returns the current local date.
///
/// This is the only clock read in the crate; call it at the edge and pass
/// the result down.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `dd-MM-yyyy` or `yyyy-MM-dd` date.
///
/// Day and month may be one or two digits. The components must survive
/// calendar construction unchanged, so `31-02-2024` is rejected rather
/// than rolled into March.
///
/// # Examples
///
/// ```rust
/// use core_kernel::calendar::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("15-06-1970"), NaiveDate::from_ymd_opt(1970, 6, 15));
/// assert_eq!(parse_date("1970-06-15"), NaiveDate::from_ymd_opt(1970, 6, 15));
/// assert_eq!(parse_date("31-02-2024"), None);
/// ```
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();
    if parts.len() != 3
        || parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let (year, month, day) = match (parts[0].len(), parts[1].len(), parts[2].len()) {
        (1..=2, 1..=2, 4) => (parts[2], parts[1], parts[0]),
        (4, 1..=2, 1..=2) => (parts[0], parts[1], parts[2]),
        _ => return None,
    };

    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|date| date.year() == year && date.month() == month && date.day() == day)
}

/// Formats a date as `dd-MM-yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Formats a date as `yyyy-MM-dd` for date inputs
pub fn format_date_for_input(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Converts an input date (`yyyy-MM-dd`) to display form.
///
/// Empty input gives an empty string; anything unparseable is returned
/// unchanged so a half-typed value is not wiped out.
pub fn convert_input_date_to_display(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    match parse_date(input) {
        Some(date) => format_date(date),
        None => input.to_string(),
    }
}

/// Whole years from `start` to `today`, clamped at zero.
fn whole_years_between(start: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - start.year();

    // Anniversary not reached yet this year
    if (today.month(), today.day()) < (start.month(), start.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}

/// Calculates age in whole years as of `today`.
///
/// Returns 0 for an unparseable date or a birth date in the future.
pub fn calculate_age(birth_date: impl AsCalendarDate, today: NaiveDate) -> u32 {
    birth_date
        .as_calendar_date()
        .map_or(0, |birth| whole_years_between(birth, today))
}

/// Calculates whole years of service from a first appointment date.
///
/// Returns 0 for an unparseable date or an appointment in the future.
pub fn years_of_service(appointment_date: impl AsCalendarDate, today: NaiveDate) -> u32 {
    appointment_date
        .as_calendar_date()
        .map_or(0, |appointment| whole_years_between(appointment, today))
}

/// Advances a date by whole years, keeping month and day.
///
/// 29 February landing in a common year becomes 1 March, which is what
/// plain calendar construction gives.
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;

    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        NaiveDate::from_ymd_opt(year, 2, 28).and_then(|feb_28| feb_28.succ_opt())
    })
}

/// Returns the retirement date for a birth date
pub fn retirement_date(birth_date: impl AsCalendarDate, retirement_age: u32) -> Option<NaiveDate> {
    birth_date
        .as_calendar_date()
        .and_then(|birth| add_years(birth, retirement_age))
}

/// Returns the retirement date in display form, or an empty string if the
/// birth date cannot be read.
///
/// # Examples
///
/// ```rust
/// use core_kernel::calendar::calculate_retirement_date;
///
/// assert_eq!(calculate_retirement_date("15-06-1970", 60), "15-06-2030");
/// assert_eq!(calculate_retirement_date("not a date", 60), "");
/// ```
pub fn calculate_retirement_date(birth_date: impl AsCalendarDate, retirement_age: u32) -> String {
    retirement_date(birth_date, retirement_age)
        .map(format_date)
        .unwrap_or_default()
}

/// Returns true when the person is within [`NEAR_RETIREMENT_WINDOW`] years
/// of the retirement age
pub fn is_near_retirement(
    birth_date: impl AsCalendarDate,
    retirement_age: u32,
    today: NaiveDate,
) -> bool {
    match birth_date.as_calendar_date() {
        Some(birth) => {
            whole_years_between(birth, today)
                >= retirement_age.saturating_sub(NEAR_RETIREMENT_WINDOW)
        }
        None => false,
    }
}

/// Range rules for a date field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeRules {
    /// Whether a date after today is accepted
    pub allow_future: bool,
    /// Minimum age in years implied by the date
    pub min_age: Option<u32>,
    /// Maximum age in years implied by the date
    pub max_age: Option<u32>,
}

impl DateRangeRules {
    /// Rules for a date of birth of a serving employee
    pub fn birth_date(min_age: u32, max_age: u32) -> Self {
        Self {
            allow_future: false,
            min_age: Some(min_age),
            max_age: Some(max_age),
        }
    }
}

/// Validates that a date is readable and falls inside the given rules
pub fn validate_date_range(
    date: impl AsCalendarDate,
    rules: &DateRangeRules,
    today: NaiveDate,
) -> Result<(), CalendarError> {
    let date = date.as_calendar_date().ok_or(CalendarError::InvalidFormat)?;

    if !rules.allow_future && date > today {
        return Err(CalendarError::FutureDate);
    }

    let age = whole_years_between(date, today);
    if let Some(min_age) = rules.min_age {
        if age < min_age {
            return Err(CalendarError::BelowMinimumAge(min_age));
        }
    }
    if let Some(max_age) = rules.max_age {
        if age > max_age {
            return Err(CalendarError::AboveMaximumAge(max_age));
        }
    }

    Ok(())
}

/// Describes a date relative to today ("Today", "In 3 days", "2 months ago")
pub fn relative_time(date: impl AsCalendarDate, today: NaiveDate) -> String {
    let Some(date) = date.as_calendar_date() else {
        return String::new();
    };

    let diff_days = (date - today).num_days();
    let abs_days = diff_days.abs();
    let future = diff_days > 0;

    if abs_days == 0 {
        return "Today".to_string();
    }
    if abs_days == 1 {
        let word = if future { "Tomorrow" } else { "Yesterday" };
        return word.to_string();
    }
    if abs_days < 30 {
        return if future {
            format!("In {abs_days} days")
        } else {
            format!("{abs_days} days ago")
        };
    }

    let months = abs_days / 30;
    if months < 12 {
        let plural = if months > 1 { "s" } else { "" };
        return if future {
            format!("In {months} month{plural}")
        } else {
            format!("{months} month{plural} ago")
        };
    }

    let years = months / 12;
    let plural = if years > 1 { "s" } else { "" };
    if future {
        format!("In {years} year{plural}")
    } else {
        format!("{years} year{plural} ago")
    }
}

/// Formats a date range for display
pub fn format_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{} - {}", format_date(start), format_date(end)),
        (Some(start), None) => format!("From {}", format_date(start)),
        (None, Some(end)) => format!("Until {}", format_date(end)),
        (None, None) => String::new(),
    }
}

/// Reformats live input for an increment date field while the user types.
///
/// Keeps ASCII digits only, inserts the `-` separator once a third digit
/// arrives and drops anything past the fourth digit. The result is not
/// checked against the calendar; see [`validate_increment_date`].
///
/// # Examples
///
/// ```rust
/// use core_kernel::calendar::auto_format_increment_date;
///
/// assert_eq!(auto_format_increment_date("0203"), "02-03");
/// assert_eq!(auto_format_increment_date("02033"), "02-03");
/// assert_eq!(auto_format_increment_date("02"), "02");
/// ```
pub fn auto_format_increment_date(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(4)
        .collect();

    if digits.len() <= 2 {
        digits
    } else {
        format!("{}-{}", &digits[..2], &digits[2..])
    }
}

/// A recurring annual date (day and month, no year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IncrementDate {
    month: u32,
    day: u32,
}

impl IncrementDate {
    /// Creates an increment date, checking it against the fixed month table
    pub fn new(day: u32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=31).contains(&day) {
            return Err(CalendarError::DayOutOfRange(day));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        if day > INCREMENT_DAYS_PER_MONTH[(month - 1) as usize] {
            return Err(CalendarError::DayNotInMonth { day, month });
        }
        Ok(Self { month, day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first occurrence strictly after `today`.
    ///
    /// 29 February skips common years.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        (today.year()..=today.year() + 8)
            .filter_map(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .find(|date| *date > today)
    }
}

impl fmt::Display for IncrementDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.day, self.month)
    }
}

impl FromStr for IncrementDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CalendarError::MissingIncrementDate);
        }

        let (day, month) = split_day_month(s).ok_or(CalendarError::IncrementDateFormat)?;
        Self::new(day, month)
    }
}

impl Serialize for IncrementDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IncrementDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Splits `d-M` / `dd-MM` into numbers, requiring 1-2 digits on each side
fn split_day_month(s: &str) -> Option<(u32, u32)> {
    let (day, month) = s.split_once('-')?;
    let is_short_number = |part: &str| {
        (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !is_short_number(day) || !is_short_number(month) {
        return None;
    }
    Some((day.parse().ok()?, month.parse().ok()?))
}

/// Validates an increment date string (`dd-MM`)
pub fn validate_increment_date(input: &str) -> Result<IncrementDate, CalendarError> {
    input.parse()
}

/// Normalizes an increment date for storage.
///
/// `d-M` is zero-padded to `dd-MM`; a full date contributes its day and
/// month; anything else is returned unchanged.
pub fn format_increment_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    if let Some((day, month)) = split_day_month(input) {
        return format!("{day:02}-{month:02}");
    }
    match parse_date(input) {
        Some(date) => date.format("%d-%m").to_string(),
        None => input.to_string(),
    }
}

/// Returns the next increment date after `today`, if the input is valid
pub fn next_increment_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    validate_increment_date(input)
        .ok()
        .and_then(|increment| increment.next_occurrence(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_display_and_input_formats() {
        assert_eq!(parse_date("15-06-1970"), Some(date(1970, 6, 15)));
        assert_eq!(parse_date("5-6-1970"), Some(date(1970, 6, 5)));
        assert_eq!(parse_date("1970-06-15"), Some(date(1970, 6, 15)));
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert_eq!(parse_date("31-02-2024"), None);
        assert_eq!(parse_date("29-02-2023"), None);
        assert_eq!(parse_date("00-01-2024"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("15/06/1970"), None);
    }

    #[test]
    fn test_age_decrements_before_birthday() {
        let birth = date(1990, 6, 15);
        assert_eq!(calculate_age(birth, date(2024, 6, 14)), 33);
        assert_eq!(calculate_age(birth, date(2024, 6, 15)), 34);
    }

    #[test]
    fn test_retirement_leap_day_rolls_forward() {
        assert_eq!(calculate_retirement_date("29-02-1964", 60), "29-02-2024");
        assert_eq!(calculate_retirement_date("29-02-1964", 61), "01-03-2025");
    }

    #[test]
    fn test_increment_date_table() {
        assert!(validate_increment_date("29-02").is_ok());
        assert_eq!(
            validate_increment_date("31-04"),
            Err(CalendarError::DayNotInMonth { day: 31, month: 4 })
        );
    }
}
