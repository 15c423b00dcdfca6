//! Staff Domain Ports
//!
//! The `StaffPort` trait is everything the staff domain needs from a
//! record store. The store itself is outside this workspace's concern; the
//! reference adapter is [`crate::adapters::InMemoryStaffStore`], and a
//! database-backed adapter only has to implement this trait.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_staff::{StaffPort, StaffService, InMemoryStaffStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(InMemoryStaffStore::new());
//! let service = StaffService::new(store, 60);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, OperationMetadata, PortError, StaffId};

use crate::search::StaffSearch;
use crate::staff::Staff;
use crate::statistics::StaffCount;

/// The main port trait for staff record storage
///
/// All methods are async and return `Result<T, PortError>` so every adapter
/// reports failures the same way. Lists come back ordered by full name.
#[async_trait]
pub trait StaffPort: DomainPort + HealthCheckable {
    /// Stores a new record
    ///
    /// The store assigns the ID and both timestamps. Returns
    /// `PortError::Conflict` if the appointment number is already used.
    async fn create(
        &self,
        staff: Staff,
        metadata: Option<OperationMetadata>,
    ) -> Result<Staff, PortError>;

    /// Retrieves a record by ID, or `PortError::NotFound`
    async fn get(
        &self,
        id: StaffId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Staff, PortError>;

    /// Retrieves every record
    async fn list_all(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Staff>, PortError>;

    /// Replaces a stored record
    ///
    /// The record's ID selects what is replaced. `created_at` is kept and
    /// `updated_at` refreshed. Returns `PortError::Conflict` if the new
    /// appointment number belongs to another record.
    async fn update(
        &self,
        staff: Staff,
        metadata: Option<OperationMetadata>,
    ) -> Result<Staff, PortError>;

    /// Deletes a record, or `PortError::NotFound`
    async fn delete(
        &self,
        id: StaffId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Retrieves the records matching a search
    async fn search(
        &self,
        search: &StaffSearch,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Staff>, PortError>;

    /// Totals by designation and gender
    async fn count(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<StaffCount, PortError>;

    /// True if a record other than `exclude` uses the appointment number
    async fn exists_appointment_number(
        &self,
        appointment_number: &str,
        exclude: Option<StaffId>,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError>;
}

/// Extension trait for StaffPort with convenience methods
#[async_trait]
pub trait StaffPortExt: StaffPort {
    /// Finds the record with an appointment number, ignoring case
    async fn find_by_appointment_number(
        &self,
        appointment_number: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<Staff>, PortError> {
        let wanted = appointment_number.trim();
        let staff = self.list_all(metadata).await?;
        Ok(staff
            .into_iter()
            .find(|s| s.appointment_number.eq_ignore_ascii_case(wanted)))
    }

    /// Finds the record holding a NIC, in either form
    async fn find_by_nic(
        &self,
        nic: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<Staff>, PortError> {
        let Ok(normalized) = domain_nic::normalize(nic) else {
            return Ok(None);
        };
        let staff = self.list_all(metadata).await?;
        Ok(staff.into_iter().find(|s| s.nic_number == normalized))
    }
}

impl<T: StaffPort + ?Sized> StaffPortExt for T {}
