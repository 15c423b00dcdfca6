//! NIC DTOs

use serde::{Deserialize, Serialize};

use domain_nic::NicInfo;

#[derive(Debug, Deserialize)]
pub struct NicRequest {
    pub nic: String,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub normalized: String,
    /// Grouped for print-outs, e.g. `1974 192 0275 7`
    pub formatted: String,
}

/// Lenient decode plus the dates derived from it
///
/// `birth_date` is empty and `age` zero when the number does not decode.
#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    #[serde(flatten)]
    pub info: NicInfo,
    pub birth_date: String,
    pub age: u32,
}
