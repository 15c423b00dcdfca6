//! Ports and Adapters Infrastructure
//!
//! Foundational types for the store ports used by the domain crates.
//! The staff domain defines its own port trait (`StaffPort`) on top of the
//! marker and health traits here; adapters (the in-memory store, or a
//! future database adapter) implement it.
//!
//! ```text
//!   StaffService ──▶ StaffPort (trait, domain_staff)
//!                         ▲
//!                         │
//!                InMemoryStaffStore / other adapters
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for port operations
///
/// Every store adapter reports failures through this type so the service
/// layer handles them the same way whichever adapter is configured.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error indicates a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports must be thread-safe so they can be shared behind an `Arc` by the
/// bridge's request handlers.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Degraded,
    Unhealthy,
    Unknown,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

/// Metadata about a port operation for tracing
///
/// The bridge fills the correlation ID from the request's `x-request-id`, so
/// store spans can be matched to the request that caused them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationMetadata {
    pub correlation_id: Option<String>,
}

impl OperationMetadata {
    /// Creates new metadata with a correlation ID
    pub fn with_correlation_id(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(correlation_id.into()),
        }
    }

    /// The correlation ID of optional metadata, or `-` when there is none
    pub fn correlation_id_of(metadata: &Option<OperationMetadata>) -> &str {
        metadata
            .as_ref()
            .and_then(|m| m.correlation_id.as_deref())
            .unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Staff", "STF-123");
        assert!(error.is_not_found());
        assert!(!error.is_conflict());
        assert!(error.to_string().contains("Staff"));
        assert!(error.to_string().contains("STF-123"));
    }

    #[test]
    fn test_port_error_kinds() {
        assert!(PortError::conflict("duplicate appointment number").is_conflict());
        assert!(!PortError::validation("bad NIC").is_conflict());
        assert!(!PortError::internal("lock poisoned").is_not_found());
    }

    #[test]
    fn test_operation_metadata() {
        let metadata = Some(OperationMetadata::with_correlation_id("REQ-123"));
        assert_eq!(OperationMetadata::correlation_id_of(&metadata), "REQ-123");
        assert_eq!(OperationMetadata::correlation_id_of(&None), "-");
        assert_eq!(
            OperationMetadata::correlation_id_of(&Some(OperationMetadata::default())),
            "-"
        );
    }
}
