//! Date helper DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DeriveDatesRequest {
    /// `dd-MM-yyyy` or `yyyy-MM-dd`
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_first_appointment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeriveDatesResponse {
    /// Date of birth in display form
    pub date_of_birth: String,
    pub age: u32,
    pub retirement_date: String,
    /// Retirement relative to today, e.g. `In 10 years`
    pub retires: String,
    pub near_retirement: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_service: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct IncrementDateRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct IncrementDateResponse {
    /// Input reformatted as typed, e.g. `02-03`
    pub formatted: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Next increment after today, `dd-MM-yyyy`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_occurrence: Option<String>,
}
