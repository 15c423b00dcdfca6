//! Staff Records Domain
//!
//! This crate holds the divisional forest office's staff records: the
//! record model, form auto-fill, field validation, search and statistics,
//! and the store port the records live behind.
//!
//! # Saving a record
//!
//! A save always runs the same pipeline, see [`StaffService`]:
//!
//! 1. [`derivation::refresh_derived`] recomputes age and retirement date
//!    from the date of birth
//! 2. [`StaffValidator`] checks every field and collects warnings
//! 3. the NIC is normalized to the 12-digit form
//! 4. the [`StaffPort`] stores the record, rejecting duplicate appointment
//!    numbers
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_staff::{derivation, Staff};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut draft = Staff::default();
//!
//! assert!(derivation::apply_nic(&mut draft, "741922757V", today, 60));
//! assert_eq!(draft.nic_number, "197419202757");
//! assert_eq!(draft.date_of_birth, "11-07-1974");
//! assert_eq!(draft.age, 49);
//! assert_eq!(draft.date_of_retirement, "11-07-2034");
//! ```

pub mod adapters;
pub mod derivation;
pub mod error;
pub mod ports;
pub mod search;
pub mod service;
pub mod staff;
pub mod statistics;
pub mod validation;

pub use adapters::InMemoryStaffStore;
pub use error::StaffError;
pub use ports::{StaffPort, StaffPortExt};
pub use search::{
    filter_staff, group_staff, sort_staff, QuickFilter, SortDirection, StaffField, StaffSearch,
};
pub use service::{BulkDeleteOutcome, DeleteFailure, StaffService};
pub use staff::{Designation, MaritalStatus, SalaryCode, Staff};
pub use statistics::{DesignationCount, GenderCount, StaffCount};
pub use validation::{StaffValidator, ValidationResult};
