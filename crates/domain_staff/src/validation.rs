//! Staff record validation
//!
//! Field rules for the staff form, collected into a [`ValidationResult`]
//! rather than stopping at the first failure so the form can show every
//! problem at once.
//!
//! # Rules
//!
//! ## Personal details
//! - Appointment number 3-20 characters, full name 2-100 characters
//! - NIC must normalize and decode
//! - Date of birth `dd-MM-yyyy`, a real date, not in the future, age 18-70
//! - Address line 1 required
//! - Contact number `0XXXXXXXXX`, `+94XXXXXXXXX` or nine digits
//! - Email, when given, `name@domain.tld`
//!
//! ## Employment and salary
//! - Designation and salary code required
//! - First appointment `dd-MM-yyyy`, a real date, not in the future
//! - Increment date `dd-MM` within the fixed month table
//! - Basic salary and increment amount not negative
//!
//! ## Warnings
//! - Within five years of retirement
//! - First appointment before the 18th birthday
//! - Date of birth differs from the one encoded in the NIC

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use core_kernel::calendar::{self, DateRangeRules, DEFAULT_RETIREMENT_AGE};
use domain_nic as nic;

use crate::staff::Staff;

/// Minimum age of a serving employee
pub const MIN_SERVICE_AGE: u32 = 18;

/// Maximum age of a serving employee
pub const MAX_SERVICE_AGE: u32 = 70;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+94|0)?[0-9]{9}$").expect("phone pattern compiles"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static DISPLAY_DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("date pattern compiles"));

/// Result of staff validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the record may be saved
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// True for a Sri Lankan phone number as typed on the form
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone.trim())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Validator for staff records
///
/// # Examples
///
/// ```rust,ignore
/// let result = StaffValidator::default().validate(&staff, calendar::today());
///
/// if !result.is_valid {
///     for error in result.errors {
///         println!("Validation error: {}", error);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaffValidator {
    retirement_age: u32,
}

impl Default for StaffValidator {
    fn default() -> Self {
        Self::new(DEFAULT_RETIREMENT_AGE)
    }
}

impl StaffValidator {
    pub fn new(retirement_age: u32) -> Self {
        Self { retirement_age }
    }

    /// Validates every field of a staff record as of `today`
    pub fn validate(&self, staff: &Staff, today: NaiveDate) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_lengths(staff, &mut result);
        Self::validate_identity(staff, today, &mut result);
        Self::validate_contact(staff, &mut result);
        Self::validate_employment(staff, today, &mut result);
        Self::validate_salary(staff, &mut result);
        self.add_warnings(staff, today, &mut result);

        result
    }

    /// Length rules declared on the record
    fn validate_lengths(staff: &Staff, result: &mut ValidationResult) {
        let Err(errors) = staff.validate() else {
            return;
        };

        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{field} is invalid ({})", e.code),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        // field_errors is a map, keep the output stable
        messages.sort();
        for message in messages {
            result.add_error(message);
        }
    }

    fn validate_identity(staff: &Staff, today: NaiveDate, result: &mut ValidationResult) {
        if staff.nic_number.trim().is_empty() {
            result.add_error("NIC number is required");
        } else if let Err(e) = nic::decode_checked(&staff.nic_number, today) {
            result.add_error(format!("NIC number: {e}"));
        }

        match validate_display_date(&staff.date_of_birth, "Date of birth") {
            Err(message) => result.add_error(message),
            Ok(birth) => {
                let rules = DateRangeRules::birth_date(MIN_SERVICE_AGE, MAX_SERVICE_AGE);
                if let Err(e) = calendar::validate_date_range(birth, &rules, today) {
                    result.add_error(format!("Date of birth: {e}"));
                }
            }
        }
    }

    fn validate_contact(staff: &Staff, result: &mut ValidationResult) {
        if staff.contact_number.trim().is_empty() {
            result.add_error("Contact number is required");
        } else if !is_valid_phone_number(&staff.contact_number) {
            result.add_error("Please enter a valid Sri Lankan phone number");
        }

        if let Some(email) = staff.email.as_deref().filter(|e| !e.trim().is_empty()) {
            if !is_valid_email(email) {
                result.add_error("Please enter a valid email address");
            }
        }
    }

    fn validate_employment(staff: &Staff, today: NaiveDate, result: &mut ValidationResult) {
        if staff.designation.is_none() {
            result.add_error("Designation is required");
        }

        match validate_display_date(&staff.date_of_first_appointment, "Date of first appointment") {
            Err(message) => result.add_error(message),
            Ok(appointment) => {
                if appointment > today {
                    result.add_error("Date of first appointment cannot be in the future");
                }
            }
        }

        if let Err(e) = calendar::validate_increment_date(&staff.increment_date) {
            result.add_error(e.to_string());
        }
    }

    fn validate_salary(staff: &Staff, result: &mut ValidationResult) {
        if staff.salary_code.is_none() {
            result.add_error("Salary code is required");
        }
        if staff.basic_salary.is_negative() {
            result.add_error("Basic salary must not be negative");
        }
        if staff.increment_amount.is_negative() {
            result.add_error("Increment amount must not be negative");
        }
    }

    fn add_warnings(&self, staff: &Staff, today: NaiveDate, result: &mut ValidationResult) {
        let birth = calendar::parse_date(&staff.date_of_birth);

        if let Some(birth) = birth {
            if calendar::is_near_retirement(birth, self.retirement_age, today) {
                result.add_warning(format!(
                    "Staff member retires on {}",
                    calendar::calculate_retirement_date(birth, self.retirement_age)
                ));
            }

            if let Some(appointment) = calendar::parse_date(&staff.date_of_first_appointment) {
                if appointment >= birth && calendar::calculate_age(birth, appointment) < MIN_SERVICE_AGE {
                    result.add_warning("First appointment was before the 18th birthday");
                }
            }

            if let Some(nic_birth) = nic::birth_date(&staff.nic_number, today) {
                if nic_birth != birth {
                    result.add_warning(format!(
                        "Date of birth does not match the NIC ({})",
                        calendar::format_date(nic_birth)
                    ));
                }
            }
        }
    }
}

/// Checks a required `dd-MM-yyyy` field and returns the parsed date
fn validate_display_date(value: &str, field: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{field} is required"));
    }
    if !DISPLAY_DATE_PATTERN.is_match(value) {
        return Err(format!("{field}: please enter a valid date in dd-MM-yyyy format"));
    }
    calendar::parse_date(value).ok_or_else(|| format!("{field}: not a real calendar date"))
}
