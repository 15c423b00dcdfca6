//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! staff registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Reference NIC vectors, a pinned "today" and sample amounts
//! - `builders`: Builder for valid staff records
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators
//! - `stores`: A store that records the metadata of each call

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod stores;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use stores::*;
