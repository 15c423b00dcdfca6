//! Staff domain errors

use thiserror::Error;

use core_kernel::PortError;
use domain_nic::NicError;

/// Errors that can occur in the staff domain
#[derive(Debug, Error)]
pub enum StaffError {
    /// Staff record with the given ID was not found
    #[error("Staff not found: {0}")]
    NotFound(String),

    /// Another record already uses the appointment number
    #[error("{0}")]
    Conflict(String),

    /// The record failed field validation
    #[error("Staff validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// The NIC could not be normalized
    #[error(transparent)]
    Nic(#[from] NicError),

    /// An update was attempted on a record without an ID
    #[error("Staff record has no ID")]
    MissingId,

    /// The store rejected or failed the operation
    #[error("Store error: {0}")]
    Store(#[source] PortError),
}

impl StaffError {
    /// Creates a NotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        StaffError::NotFound(id.to_string())
    }

    /// Creates a ValidationFailed error from validation messages
    pub fn validation_failed(errors: Vec<String>) -> Self {
        StaffError::ValidationFailed(errors)
    }

    /// Validation messages, if this is a validation failure
    pub fn validation_errors(&self) -> &[String] {
        match self {
            StaffError::ValidationFailed(errors) => errors,
            _ => &[],
        }
    }
}

impl From<PortError> for StaffError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::NotFound { id, .. } => StaffError::NotFound(id),
            PortError::Conflict { message } => StaffError::Conflict(message),
            PortError::Validation { message, .. } => StaffError::ValidationFailed(vec![message]),
            other => StaffError::Store(other),
        }
    }
}
