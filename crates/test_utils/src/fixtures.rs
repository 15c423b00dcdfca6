//! Pre-built Test Fixtures
//!
//! Reference data shared across the test suites. Everything date-dependent
//! is computed against [`TemporalFixtures::today`] so results never move
//! with the clock.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_nic::Gender;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The pinned working date (1 June 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// A date when staff born in 1974 are near retirement (1 January 2030)
    pub fn retirement_horizon() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
    }
}

/// A NIC with everything it decodes to, as of [`TemporalFixtures::today`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NicVector {
    pub legacy: &'static str,
    pub modern: &'static str,
    pub birth_year: i32,
    pub day_of_year: u32,
    pub gender: Gender,
    /// `dd-MM-yyyy`
    pub birth_date: &'static str,
    pub age: u32,
}

/// Reference NIC vectors
pub static NIC_VECTORS: Lazy<Vec<NicVector>> = Lazy::new(|| {
    vec![
        NicVector {
            legacy: "741922757V",
            modern: "197419202757",
            birth_year: 1974,
            day_of_year: 192,
            gender: Gender::Male,
            birth_date: "11-07-1974",
            age: 49,
        },
        NicVector {
            legacy: "916980123V",
            modern: "199169800123",
            birth_year: 1991,
            day_of_year: 198,
            gender: Gender::Female,
            birth_date: "17-07-1991",
            age: 32,
        },
        NicVector {
            legacy: "861234567V",
            modern: "198612304567",
            birth_year: 1986,
            day_of_year: 123,
            gender: Gender::Male,
            birth_date: "03-05-1986",
            age: 38,
        },
        NicVector {
            legacy: "001001234V",
            modern: "200010001234",
            birth_year: 2000,
            day_of_year: 100,
            gender: Gender::Male,
            birth_date: "09-04-2000",
            age: 24,
        },
        NicVector {
            legacy: "905551234X",
            modern: "199055501234",
            birth_year: 1990,
            day_of_year: 55,
            gender: Gender::Female,
            birth_date: "24-02-1990",
            age: 34,
        },
    ]
});

/// Fixture for identity numbers that must be rejected
pub struct NicFixtures;

impl NicFixtures {
    /// Numbers that fail strict normalization
    pub fn malformed() -> &'static [&'static str] {
        &["", "74192275", "74192275VV", "741922757A", "740002757V", "19741920275", "1974A9202757"]
    }
}

/// Fixture for salary amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn basic_salary() -> Money {
        Money::new(dec!(48500.00))
    }

    pub fn increment_amount() -> Money {
        Money::new(dec!(850.00))
    }
}
