//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use chrono::NaiveDate;

use core_kernel::Money;
use domain_nic::{decode_checked, Gender};
use domain_staff::{Staff, ValidationResult};

use crate::fixtures::NicVector;

/// Asserts that validation passed, listing the errors if it did not
pub fn assert_valid(result: &ValidationResult) {
    assert!(
        result.is_valid && result.errors.is_empty(),
        "Expected a valid record, got errors: {:?}",
        result.errors
    );
}

/// Asserts that validation failed with the given message among its errors
pub fn assert_invalid_with(result: &ValidationResult, message: &str) {
    assert!(!result.is_valid, "Expected an invalid record");
    assert!(
        result.errors.iter().any(|e| e == message),
        "Expected error {:?}, got: {:?}",
        message,
        result.errors
    );
}

/// Asserts that a warning starting with `prefix` was raised
pub fn assert_warned(result: &ValidationResult, prefix: &str) {
    assert!(
        result.warnings.iter().any(|w| w.starts_with(prefix)),
        "Expected a warning starting with {:?}, got: {:?}",
        prefix,
        result.warnings
    );
}

/// Asserts that a NIC decodes to the year, day and gender given
pub fn assert_nic_decodes_to(raw: &str, today: NaiveDate, year: i32, day: u32, gender: Gender) {
    let details = decode_checked(raw, today)
        .unwrap_or_else(|e| panic!("Expected {raw:?} to decode, got: {e}"));
    assert_eq!(
        (details.birth_year, details.day_of_year, details.gender),
        (year, day, gender),
        "Decoded fields of {raw:?} differ"
    );
}

/// Asserts both forms of a reference vector decode to its fields
pub fn assert_nic_vector(vector: &NicVector, today: NaiveDate) {
    for raw in [vector.legacy, vector.modern] {
        assert_nic_decodes_to(raw, today, vector.birth_year, vector.day_of_year, vector.gender);
    }
}

/// Asserts that records are ordered by full name, ignoring case
pub fn assert_sorted_by_name(staff: &[Staff]) {
    let names: Vec<String> = staff.iter().map(|s| s.full_name.to_lowercase()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "Staff are not ordered by name");
}

/// Asserts that an amount matches, showing both in display form
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual, expected,
        "Money differs: actual={actual}, expected={expected}"
    );
}
