//! Form auto-fill helpers built on the lenient decode
//!
//! These never fail. An undecodable number gives `None`, `0` or an empty
//! string so a half-typed NIC simply leaves the dependent fields blank.

use chrono::{Datelike, Days, NaiveDate};
use core_kernel::calendar;

use crate::codec::decode;
use crate::gender::Gender;

/// Gender encoded in the NIC
pub fn gender_of(raw: &str, today: NaiveDate) -> Option<Gender> {
    let info = decode(raw, today);
    if info.is_valid {
        info.gender
    } else {
        None
    }
}

/// Reconstructs the birth date from the year and day of year.
///
/// The date is built as 1 January plus `day - 1` days and accepted only if
/// it is still in the same year with the same ordinal, so day 366 of a
/// common year yields `None` instead of 1 January of the next year.
pub fn birth_date(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let info = decode(raw, today);
    if !info.is_valid {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(info.birth_year, 1, 1)?
        .checked_add_days(Days::new(u64::from(info.day_of_year.checked_sub(1)?)))?;

    if date.year() == info.birth_year && date.ordinal() == info.day_of_year {
        Some(date)
    } else {
        tracing::debug!(
            birth_year = info.birth_year,
            day_of_year = info.day_of_year,
            "NIC day of year does not exist in its birth year"
        );
        None
    }
}

/// Birth date in display form (`dd-MM-yyyy`), or an empty string
pub fn birth_date_of(raw: &str, today: NaiveDate) -> String {
    birth_date(raw, today)
        .map(calendar::format_date)
        .unwrap_or_default()
}

/// Age in whole years as of `today`, or 0 if the NIC cannot be decoded
pub fn age_of(raw: &str, today: NaiveDate) -> u32 {
    birth_date(raw, today).map_or(0, |birth| calendar::calculate_age(birth, today))
}

/// True if the NIC decodes cleanly
pub fn is_valid_nic(raw: &str, today: NaiveDate) -> bool {
    decode(raw, today).is_valid
}
