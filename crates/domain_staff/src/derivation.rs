//! Form auto-fill
//!
//! Keeps the dependent fields of a staff draft consistent as the clerk
//! edits it: typing a NIC fills gender, date of birth, age and retirement
//! date; typing a date of birth refreshes age and retirement date; the
//! increment date is reformatted as it is typed.
//!
//! All functions are lenient. Input that cannot be read leaves the
//! derived fields blank or untouched instead of failing.

use chrono::NaiveDate;

use core_kernel::calendar;
use domain_nic as nic;

use crate::staff::Staff;

/// Applies a typed NIC to the draft.
///
/// When the NIC normalizes, the normalized number is stored. When it also
/// decodes to a real birth date, gender, date of birth, age and retirement
/// date are filled from it. Returns true if the derived fields were filled.
pub fn apply_nic(draft: &mut Staff, raw: &str, today: NaiveDate, retirement_age: u32) -> bool {
    let Ok(normalized) = nic::normalize(raw) else {
        return false;
    };
    draft.nic_number = normalized;

    let Some(birth) = nic::birth_date(&draft.nic_number, today) else {
        return false;
    };
    if let Some(gender) = nic::gender_of(&draft.nic_number, today) {
        draft.gender = gender;
    }
    set_birth_date(draft, birth, today, retirement_age);
    true
}

/// Applies a typed date of birth (`dd-MM-yyyy` or `yyyy-MM-dd`).
///
/// A readable date is stored in display form with age and retirement date
/// derived from it. Anything else is kept as typed with age 0 and no
/// retirement date.
pub fn apply_date_of_birth(draft: &mut Staff, raw: &str, today: NaiveDate, retirement_age: u32) {
    match calendar::parse_date(raw) {
        Some(birth) => set_birth_date(draft, birth, today, retirement_age),
        None => {
            draft.date_of_birth = raw.trim().to_string();
            draft.age = 0;
            draft.date_of_retirement.clear();
        }
    }
}

/// Applies a typed increment date, reformatting it to `dd-MM` as it grows
pub fn apply_increment_date(draft: &mut Staff, raw: &str) {
    draft.increment_date = calendar::auto_format_increment_date(raw);
}

/// Recomputes every derived field before a save.
///
/// Age and retirement date follow the stored date of birth, dates are put
/// in display form, the increment date is padded to `dd-MM` and the NIC is
/// normalized when it can be.
pub fn refresh_derived(draft: &mut Staff, today: NaiveDate, retirement_age: u32) {
    if let Ok(normalized) = nic::normalize(&draft.nic_number) {
        draft.nic_number = normalized;
    }

    match calendar::parse_date(&draft.date_of_birth) {
        Some(birth) => set_birth_date(draft, birth, today, retirement_age),
        None => {
            draft.age = 0;
            draft.date_of_retirement.clear();
        }
    }

    if let Some(appointment) = calendar::parse_date(&draft.date_of_first_appointment) {
        draft.date_of_first_appointment = calendar::format_date(appointment);
    }

    draft.increment_date = calendar::format_increment_date(draft.increment_date.trim());
}

fn set_birth_date(draft: &mut Staff, birth: NaiveDate, today: NaiveDate, retirement_age: u32) {
    draft.date_of_birth = calendar::format_date(birth);
    draft.age = calendar::calculate_age(birth, today);
    draft.date_of_retirement = calendar::calculate_retirement_date(birth, retirement_age);
}
