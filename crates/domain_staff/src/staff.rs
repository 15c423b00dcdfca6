//! Staff record model
//!
//! A [`Staff`] record mirrors the office's staff form: personal details,
//! employment details and salary details. Dates are kept in display form
//! (`dd-MM-yyyy`, increment date `dd-MM`) because that is what clerks type
//! and what the printed record shows; the derived fields (age, retirement
//! date) are recomputed from them by [`crate::derivation`].
//!
//! Enumerations serialize with the stored values used by the office's
//! existing records (`"Asst.District Forest Officer"`, `"S1"`, `"Single"`),
//! and offer a title-cased [`Designation::label`] for display.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Money, StaffId};
use domain_nic::Gender;

/// Posts held at the divisional forest office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Designation {
    #[serde(rename = "District Forest Officer")]
    DistrictForestOfficer,
    #[serde(rename = "Asst.District Forest Officer")]
    AssistantDistrictForestOfficer,
    #[serde(rename = "Management Service Officer")]
    ManagementServiceOfficer,
    #[serde(rename = "Development Officer")]
    DevelopmentOfficer,
    #[serde(rename = "Range Forest officer")]
    RangeForestOfficer,
    #[serde(rename = "Beat forest officer")]
    BeatForestOfficer,
    #[serde(rename = "extension officer")]
    ExtensionOfficer,
    #[serde(rename = "field forest assistant")]
    FieldForestAssistant,
    #[serde(rename = "office employee service")]
    OfficeEmployeeService,
    #[serde(rename = "garden labour")]
    GardenLabour,
}

impl Designation {
    pub const ALL: [Designation; 10] = [
        Designation::DistrictForestOfficer,
        Designation::AssistantDistrictForestOfficer,
        Designation::ManagementServiceOfficer,
        Designation::DevelopmentOfficer,
        Designation::RangeForestOfficer,
        Designation::BeatForestOfficer,
        Designation::ExtensionOfficer,
        Designation::FieldForestAssistant,
        Designation::OfficeEmployeeService,
        Designation::GardenLabour,
    ];

    /// Value as stored on the record
    pub fn as_str(&self) -> &'static str {
        match self {
            Designation::DistrictForestOfficer => "District Forest Officer",
            Designation::AssistantDistrictForestOfficer => "Asst.District Forest Officer",
            Designation::ManagementServiceOfficer => "Management Service Officer",
            Designation::DevelopmentOfficer => "Development Officer",
            Designation::RangeForestOfficer => "Range Forest officer",
            Designation::BeatForestOfficer => "Beat forest officer",
            Designation::ExtensionOfficer => "extension officer",
            Designation::FieldForestAssistant => "field forest assistant",
            Designation::OfficeEmployeeService => "office employee service",
            Designation::GardenLabour => "garden labour",
        }
    }

    /// Title-cased label for forms and print-outs
    pub fn label(&self) -> &'static str {
        match self {
            Designation::DistrictForestOfficer => "District Forest Officer",
            Designation::AssistantDistrictForestOfficer => "Assistant District Forest Officer",
            Designation::ManagementServiceOfficer => "Management Service Officer",
            Designation::DevelopmentOfficer => "Development Officer",
            Designation::RangeForestOfficer => "Range Forest Officer",
            Designation::BeatForestOfficer => "Beat Forest Officer",
            Designation::ExtensionOfficer => "Extension Officer",
            Designation::FieldForestAssistant => "Field Forest Assistant",
            Designation::OfficeEmployeeService => "Office Employee Service",
            Designation::GardenLabour => "Garden Labour",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Designation {
    type Err = String;

    /// Accepts the stored value or the label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Designation::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted) || d.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown designation: {wanted}"))
    }
}

/// Salary scale codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SalaryCode {
    S1,
    S2,
    S3,
    D1,
    D2,
    D3,
    A1,
    A2,
}

impl SalaryCode {
    pub const ALL: [SalaryCode; 8] = [
        SalaryCode::S1,
        SalaryCode::S2,
        SalaryCode::S3,
        SalaryCode::D1,
        SalaryCode::D2,
        SalaryCode::D3,
        SalaryCode::A1,
        SalaryCode::A2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryCode::S1 => "S1",
            SalaryCode::S2 => "S2",
            SalaryCode::S3 => "S3",
            SalaryCode::D1 => "D1",
            SalaryCode::D2 => "D2",
            SalaryCode::D3 => "D3",
            SalaryCode::A1 => "A1",
            SalaryCode::A2 => "A2",
        }
    }
}

impl fmt::Display for SalaryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalaryCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SalaryCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown salary code: {wanted}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staff member's record
///
/// Also used as the form draft: a fresh [`Staff::default`] has no id,
/// designation or salary code, `Male` gender and `Single` marital status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Staff {
    /// Assigned by the store on create
    pub id: Option<StaffId>,

    // Identification & personal details
    #[validate(length(min = 3, max = 20, message = "Appointment number must be between 3 and 20 characters"))]
    pub appointment_number: String,
    #[validate(length(min = 2, max = 100, message = "Full name must be between 2 and 100 characters"))]
    pub full_name: String,
    pub gender: Gender,
    /// `dd-MM-yyyy`
    pub date_of_birth: String,
    pub age: u32,
    /// Stored in the modern 12-digit form
    pub nic_number: String,
    pub marital_status: MaritalStatus,
    #[validate(length(min = 1, message = "Address line 1 is required"))]
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub contact_number: String,
    pub email: Option<String>,

    // Employment details
    pub designation: Option<Designation>,
    /// `dd-MM-yyyy`
    pub date_of_first_appointment: String,
    /// `dd-MM-yyyy`, derived from the date of birth
    pub date_of_retirement: String,
    /// `dd-MM`
    pub increment_date: String,

    // Salary details
    pub salary_code: Option<SalaryCode>,
    pub basic_salary: Money,
    pub increment_amount: Money,

    /// Opaque reference to the staff photo
    pub image_path: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Staff {
    /// Address lines joined for display, skipping blank lines
    pub fn address(&self) -> String {
        [
            Some(self.address_line1.as_str()),
            self.address_line2.as_deref(),
            self.address_line3.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Designation label, or an empty string when not chosen yet
    pub fn designation_label(&self) -> &'static str {
        self.designation.map_or("", |d| d.label())
    }
}
