//! Staff DTOs

use serde::{Deserialize, Serialize};

use core_kernel::StaffId;
use domain_staff::{QuickFilter, SortDirection, Staff, StaffField, ValidationResult};

/// Query string accepted by the staff list
#[derive(Debug, Default, Deserialize)]
pub struct ListStaffQuery {
    /// Quick filter applied before sorting
    pub filter: Option<QuickFilter>,
    /// Free text matched against name and appointment number
    pub q: Option<String>,
    pub sort: Option<StaffField>,
    #[serde(default)]
    pub direction: SortDirection,
}

/// A stored record plus the display values the list screen shows
#[derive(Debug, Serialize)]
pub struct StaffResponse {
    #[serde(flatten)]
    pub staff: Staff,
    pub designation_label: String,
    pub address: String,
    pub basic_salary_display: String,
}

impl From<Staff> for StaffResponse {
    fn from(staff: Staff) -> Self {
        Self {
            designation_label: staff.designation_label().to_string(),
            address: staff.address(),
            basic_salary_display: staff.basic_salary.to_string(),
            staff,
        }
    }
}

/// A draft after auto-fill, with the result of validating it
#[derive(Debug, Serialize)]
pub struct PrepareStaffResponse {
    pub staff: Staff,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl PrepareStaffResponse {
    pub fn new(staff: Staff, result: ValidationResult) -> Self {
        Self {
            staff,
            is_valid: result.is_valid,
            errors: result.errors,
            warnings: result.warnings,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<StaffId>,
}
