//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::Money;
use domain_staff::{derivation, Designation, MaritalStatus, SalaryCode, Staff};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for staff records
///
/// The defaults pass validation as of [`TemporalFixtures::today`]. Setting
/// the NIC or date of birth re-runs the form auto-fill, so derived fields
/// stay consistent.
pub struct StaffBuilder {
    staff: Staff,
    today: NaiveDate,
    retirement_age: u32,
}

impl Default for StaffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StaffBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        let today = TemporalFixtures::today();
        let mut staff = Staff {
            appointment_number: "BFO-001".to_string(),
            full_name: "Ruwan Kumara".to_string(),
            marital_status: MaritalStatus::Married,
            address_line1: "Forest Office Quarters".to_string(),
            address_line2: Some("Station Road".to_string()),
            address_line3: Some("Vavuniya".to_string()),
            contact_number: "0771234567".to_string(),
            email: Some("ruwan@forest.gov.lk".to_string()),
            designation: Some(Designation::BeatForestOfficer),
            date_of_first_appointment: "01-03-2010".to_string(),
            increment_date: "01-03".to_string(),
            salary_code: Some(SalaryCode::D1),
            basic_salary: MoneyFixtures::basic_salary(),
            increment_amount: MoneyFixtures::increment_amount(),
            ..Default::default()
        };
        derivation::apply_nic(&mut staff, "861234567V", today, 60);

        Self {
            staff,
            today,
            retirement_age: 60,
        }
    }

    /// Sets the date the derived fields are computed against
    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = today;
        derivation::refresh_derived(&mut self.staff, today, self.retirement_age);
        self
    }

    pub fn with_appointment_number(mut self, number: impl Into<String>) -> Self {
        self.staff.appointment_number = number.into();
        self
    }

    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.staff.full_name = name.into();
        self
    }

    /// Sets the NIC, filling gender and dates from it when it decodes
    pub fn with_nic(mut self, nic: &str) -> Self {
        if !derivation::apply_nic(&mut self.staff, nic, self.today, self.retirement_age) {
            self.staff.nic_number = nic.to_string();
        }
        self
    }

    /// Sets the date of birth without touching the NIC
    pub fn with_date_of_birth(mut self, date: &str) -> Self {
        derivation::apply_date_of_birth(&mut self.staff, date, self.today, self.retirement_age);
        self
    }

    pub fn with_designation(mut self, designation: Designation) -> Self {
        self.staff.designation = Some(designation);
        self
    }

    pub fn without_designation(mut self) -> Self {
        self.staff.designation = None;
        self
    }

    pub fn with_salary_code(mut self, code: SalaryCode) -> Self {
        self.staff.salary_code = Some(code);
        self
    }

    pub fn with_marital_status(mut self, status: MaritalStatus) -> Self {
        self.staff.marital_status = status;
        self
    }

    pub fn with_contact_number(mut self, number: impl Into<String>) -> Self {
        self.staff.contact_number = number.into();
        self
    }

    pub fn with_email(mut self, email: Option<&str>) -> Self {
        self.staff.email = email.map(str::to_string);
        self
    }

    pub fn with_first_appointment(mut self, date: impl Into<String>) -> Self {
        self.staff.date_of_first_appointment = date.into();
        self
    }

    pub fn with_increment_date(mut self, raw: &str) -> Self {
        derivation::apply_increment_date(&mut self.staff, raw);
        self
    }

    pub fn with_basic_salary(mut self, amount: Decimal) -> Self {
        self.staff.basic_salary = Money::new(amount);
        self
    }

    /// Builds the staff record
    pub fn build(self) -> Staff {
        self.staff
    }
}
