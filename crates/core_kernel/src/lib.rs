//! Core Kernel - Foundational types and utilities for the staff registry
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Calendar arithmetic for birth, retirement, service and increment dates
//! - Money type for salary amounts with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Port infrastructure for swappable store adapters

pub mod calendar;
pub mod money;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use calendar::{AsCalendarDate, CalendarError, DateRangeRules, IncrementDate};
pub use money::{Money, MoneyError};
pub use identifiers::{StaffId, RequestId};
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable,
    OperationMetadata,
};
pub use error::CoreError;
