//! Staff record operations
//!
//! [`StaffService`] sits between the bridge and the store. Every save goes
//! through the same steps: derived fields are recomputed, the NIC is
//! normalized, the record is validated and only then handed to the store.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use core_kernel::{HealthCheckResult, OperationMetadata, StaffId};
use domain_nic as nic;

use crate::derivation;
use crate::error::StaffError;
use crate::ports::StaffPort;
use crate::search::{QuickFilter, StaffSearch};
use crate::staff::Staff;
use crate::statistics::StaffCount;
use crate::validation::{StaffValidator, ValidationResult};

/// A record that could not be deleted during a bulk delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFailure {
    pub id: StaffId,
    pub reason: String,
}

/// Outcome of [`StaffService::delete_many`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteOutcome {
    pub deleted: Vec<StaffId>,
    pub failed: Vec<DeleteFailure>,
}

impl BulkDeleteOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Staff operations over any [`StaffPort`]
///
/// A service scoped with [`StaffService::with_metadata`] hands that metadata
/// to every store call it makes.
pub struct StaffService<P: StaffPort + ?Sized> {
    store: Arc<P>,
    validator: StaffValidator,
    retirement_age: u32,
    metadata: Option<OperationMetadata>,
}

impl<P: StaffPort + ?Sized> Clone for StaffService<P> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            validator: self.validator,
            retirement_age: self.retirement_age,
            metadata: self.metadata.clone(),
        }
    }
}

impl<P: StaffPort + ?Sized> StaffService<P> {
    pub fn new(store: Arc<P>, retirement_age: u32) -> Self {
        Self {
            store,
            validator: StaffValidator::new(retirement_age),
            retirement_age,
            metadata: None,
        }
    }

    /// A copy of this service whose store calls carry `metadata`
    pub fn with_metadata(&self, metadata: OperationMetadata) -> Self {
        Self {
            metadata: Some(metadata),
            ..self.clone()
        }
    }

    pub fn metadata(&self) -> Option<&OperationMetadata> {
        self.metadata.as_ref()
    }

    pub fn retirement_age(&self) -> u32 {
        self.retirement_age
    }

    pub fn store(&self) -> &Arc<P> {
        &self.store
    }

    /// Recomputes derived fields and validates, without saving.
    ///
    /// The returned draft is what would be stored.
    pub fn prepare(&self, mut staff: Staff, today: NaiveDate) -> (Staff, ValidationResult) {
        derivation::refresh_derived(&mut staff, today, self.retirement_age);
        let result = self.validator.validate(&staff, today);
        (staff, result)
    }

    /// Validates and stores a new record
    #[instrument(
        skip(self, staff),
        fields(
            appointment_number = %staff.appointment_number,
            correlation_id = OperationMetadata::correlation_id_of(&self.metadata),
        )
    )]
    pub async fn add_staff(&self, staff: Staff, today: NaiveDate) -> Result<Staff, StaffError> {
        let staff = self.checked(staff, today)?;

        if self
            .store
            .exists_appointment_number(&staff.appointment_number, None, self.metadata.clone())
            .await?
        {
            return Err(StaffError::Conflict(format!(
                "Appointment number {} is already in use",
                staff.appointment_number.trim()
            )));
        }

        let created = self.store.create(staff, self.metadata.clone()).await?;
        info!(id = ?created.id, "Staff member added");
        Ok(created)
    }

    /// Validates and replaces an existing record
    #[instrument(
        skip(self, staff),
        fields(id = ?staff.id, correlation_id = OperationMetadata::correlation_id_of(&self.metadata))
    )]
    pub async fn update_staff(&self, staff: Staff, today: NaiveDate) -> Result<Staff, StaffError> {
        let id = staff.id.ok_or(StaffError::MissingId)?;
        let staff = self.checked(staff, today)?;

        if self
            .store
            .exists_appointment_number(&staff.appointment_number, Some(id), self.metadata.clone())
            .await?
        {
            return Err(StaffError::Conflict(format!(
                "Appointment number {} is already in use",
                staff.appointment_number.trim()
            )));
        }

        let updated = self.store.update(staff, self.metadata.clone()).await?;
        info!("Staff member updated");
        Ok(updated)
    }

    pub async fn get_staff(&self, id: StaffId) -> Result<Staff, StaffError> {
        Ok(self.store.get(id, self.metadata.clone()).await?)
    }

    /// Every record, ordered by full name
    pub async fn list_staff(&self) -> Result<Vec<Staff>, StaffError> {
        Ok(self.store.list_all(self.metadata.clone()).await?)
    }

    #[instrument(skip(self), fields(correlation_id = OperationMetadata::correlation_id_of(&self.metadata)))]
    pub async fn delete_staff(&self, id: StaffId) -> Result<(), StaffError> {
        self.store.delete(id, self.metadata.clone()).await?;
        info!("Staff member deleted");
        Ok(())
    }

    /// Deletes each record in turn, collecting failures instead of stopping
    #[instrument(
        skip(self, ids),
        fields(count = ids.len(), correlation_id = OperationMetadata::correlation_id_of(&self.metadata))
    )]
    pub async fn delete_many(&self, ids: &[StaffId]) -> BulkDeleteOutcome {
        let mut outcome = BulkDeleteOutcome::default();

        for &id in ids {
            match self.store.delete(id, self.metadata.clone()).await {
                Ok(()) => outcome.deleted.push(id),
                Err(e) => {
                    warn!(%id, error = %e, "Bulk delete skipped a record");
                    outcome.failed.push(DeleteFailure {
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            deleted = outcome.deleted.len(),
            failed = outcome.failed.len(),
            "Bulk delete finished"
        );
        outcome
    }

    /// Records matching the search, ordered by full name.
    ///
    /// An empty search lists everything.
    pub async fn search_staff(&self, search: &StaffSearch) -> Result<Vec<Staff>, StaffError> {
        if search.is_empty() {
            return self.list_staff().await;
        }
        debug!(?search, "Searching staff");
        Ok(self.store.search(search, self.metadata.clone()).await?)
    }

    /// Records passing a quick filter, ordered by full name
    pub async fn quick_filter(
        &self,
        filter: QuickFilter,
        today: NaiveDate,
    ) -> Result<Vec<Staff>, StaffError> {
        let staff = self.list_staff().await?;
        Ok(staff
            .into_iter()
            .filter(|s| filter.matches(s, today, self.retirement_age))
            .collect())
    }

    pub async fn statistics(&self) -> Result<StaffCount, StaffError> {
        Ok(self.store.count(self.metadata.clone()).await?)
    }

    pub async fn health(&self) -> HealthCheckResult {
        self.store.health_check().await
    }

    /// Prepares a record for saving, failing on the first unusable input
    fn checked(&self, staff: Staff, today: NaiveDate) -> Result<Staff, StaffError> {
        let (mut staff, result) = self.prepare(staff, today);

        if !result.is_valid {
            debug!(errors = ?result.errors, "Staff record rejected");
            return Err(StaffError::validation_failed(result.errors));
        }

        // refresh_derived is lenient; a save needs the strict form
        staff.nic_number = nic::normalize(&staff.nic_number)?;

        for warning in &result.warnings {
            debug!(%warning, "Staff record saved with warning");
        }
        Ok(staff)
    }
}
