//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::Money;
use domain_nic::Gender;
use domain_staff::{Designation, MaritalStatus, SalaryCode, Staff};

use crate::builders::StaffBuilder;

/// Parts of a legacy NIC that decodes to a real date
#[derive(Debug, Clone)]
pub struct LegacyNicParts {
    pub yy: u32,
    /// Day of year before the gender offset
    pub day: u32,
    pub female: bool,
    pub serial: u32,
    pub check_digit: u32,
    pub letter: char,
}

impl LegacyNicParts {
    pub fn encoded_day(&self) -> u32 {
        if self.female {
            self.day + 500
        } else {
            self.day
        }
    }

    /// Birth year under the century rule
    pub fn birth_year(&self) -> i32 {
        if self.yy <= 50 {
            2000 + self.yy as i32
        } else {
            1900 + self.yy as i32
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{:02}{:03}{:03}{}{}",
            self.yy,
            self.encoded_day(),
            self.serial,
            self.check_digit,
            self.letter
        )
    }

    pub fn modern(&self) -> String {
        format!(
            "{}{:03}0{:03}{}",
            self.birth_year(),
            self.encoded_day(),
            self.serial,
            self.check_digit
        )
    }
}

/// Strategy for legacy NIC parts with years 1951-1999 or 2000-2030
/// and days 1-365, so every value decodes to a real date
pub fn legacy_nic_parts_strategy() -> impl Strategy<Value = LegacyNicParts> {
    (
        prop_oneof![0u32..=30, 51u32..=99],
        1u32..=365,
        any::<bool>(),
        0u32..1000,
        0u32..10,
        prop_oneof![Just('V'), Just('X')],
    )
        .prop_map(|(yy, day, female, serial, check_digit, letter)| LegacyNicParts {
            yy,
            day,
            female,
            serial,
            check_digit,
            letter,
        })
}

/// Strategy for legacy NIC strings that decode to a real date
pub fn legacy_nic_strategy() -> impl Strategy<Value = String> {
    legacy_nic_parts_strategy().prop_map(|parts| parts.render())
}

/// Strategy for arbitrary printable input, for never-panics checks
pub fn junk_nic_strategy() -> impl Strategy<Value = String> {
    "[ 0-9A-Za-z]{0,16}"
}

pub fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

pub fn designation_strategy() -> impl Strategy<Value = Designation> {
    proptest::sample::select(Designation::ALL.to_vec())
}

pub fn salary_code_strategy() -> impl Strategy<Value = SalaryCode> {
    proptest::sample::select(SalaryCode::ALL.to_vec())
}

pub fn marital_status_strategy() -> impl Strategy<Value = MaritalStatus> {
    prop_oneof![
        Just(MaritalStatus::Single),
        Just(MaritalStatus::Married),
        Just(MaritalStatus::Divorced),
        Just(MaritalStatus::Widowed),
    ]
}

/// Strategy for non-negative salary amounts up to Rs. 500,000.00
pub fn salary_strategy() -> impl Strategy<Value = Money> {
    (0i64..50_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy for staff records that pass validation as of the pinned today.
///
/// Birth years stay within 1960-1999 so ages fall inside the service range.
pub fn staff_strategy() -> impl Strategy<Value = Staff> {
    (
        "[A-Z]{2,3}-[0-9]{3}",
        "[A-Z][a-z]{2,10} [A-Z][a-z]{2,12}",
        (60u32..=99, 1u32..=365, any::<bool>(), 0u32..1000, 0u32..10),
        designation_strategy(),
        salary_code_strategy(),
        marital_status_strategy(),
        salary_strategy(),
    )
        .prop_map(
            |(number, name, (yy, day, female, serial, check_digit), designation, code, status, salary)| {
                let nic = LegacyNicParts {
                    yy,
                    day,
                    female,
                    serial,
                    check_digit,
                    letter: 'V',
                }
                .render();

                let mut staff = StaffBuilder::new()
                    .with_appointment_number(number)
                    .with_full_name(name)
                    .with_nic(&nic)
                    .with_designation(designation)
                    .with_salary_code(code)
                    .with_marital_status(status)
                    .build();
                staff.basic_salary = salary;
                staff
            },
        )
}
