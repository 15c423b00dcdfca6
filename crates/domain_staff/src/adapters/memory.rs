//! In-memory staff store

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
    StaffId,
};

use crate::ports::StaffPort;
use crate::search::StaffSearch;
use crate::staff::Staff;
use crate::statistics::StaffCount;

/// Staff store backed by a `HashMap`
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStaffStore {
    records: Arc<RwLock<HashMap<StaffId, Staff>>>,
}

impl InMemoryStaffStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store, assigning IDs where missing
    pub async fn with_staff(staff: Vec<Staff>) -> Self {
        let store = Self::new();
        {
            let mut records = store.records.write().await;
            for mut s in staff {
                let id = *s.id.get_or_insert_with(StaffId::new);
                records.insert(id, s);
            }
        }
        store
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// Orders by full name ignoring case, then appointment number
fn sorted(mut staff: Vec<Staff>) -> Vec<Staff> {
    staff.sort_by(|a, b| {
        a.full_name
            .to_lowercase()
            .cmp(&b.full_name.to_lowercase())
            .then_with(|| a.appointment_number.cmp(&b.appointment_number))
    });
    staff
}

fn same_appointment_number(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn duplicate(appointment_number: &str) -> PortError {
    PortError::conflict(format!(
        "Appointment number {} is already in use",
        appointment_number.trim()
    ))
}

impl DomainPort for InMemoryStaffStore {}

#[async_trait]
impl HealthCheckable for InMemoryStaffStore {
    async fn health_check(&self) -> HealthCheckResult {
        let started = Instant::now();
        let records = self.records.read().await.len();

        HealthCheckResult {
            adapter_id: "in-memory-staff-store".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: started.elapsed().as_millis() as u64,
            message: Some(format!("{records} staff records")),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl StaffPort for InMemoryStaffStore {
    #[instrument(
        skip(self, staff, metadata),
        fields(
            appointment_number = %staff.appointment_number,
            correlation_id = OperationMetadata::correlation_id_of(&metadata),
        )
    )]
    async fn create(
        &self,
        mut staff: Staff,
        metadata: Option<OperationMetadata>,
    ) -> Result<Staff, PortError> {
        let mut records = self.records.write().await;

        if records
            .values()
            .any(|s| same_appointment_number(&s.appointment_number, &staff.appointment_number))
        {
            return Err(duplicate(&staff.appointment_number));
        }

        let id = StaffId::new();
        let now = Utc::now();
        staff.id = Some(id);
        staff.created_at = Some(now);
        staff.updated_at = Some(now);

        records.insert(id, staff.clone());
        info!(%id, "Staff record created");
        Ok(staff)
    }

    #[instrument(skip(self, metadata), fields(correlation_id = OperationMetadata::correlation_id_of(&metadata)))]
    async fn get(
        &self,
        id: StaffId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Staff, PortError> {
        debug!("Fetching staff record");
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Staff", id))
    }

    #[instrument(skip_all, fields(correlation_id = OperationMetadata::correlation_id_of(&metadata)))]
    async fn list_all(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Staff>, PortError> {
        let staff = self.records.read().await.values().cloned().collect();
        Ok(sorted(staff))
    }

    #[instrument(
        skip(self, staff, metadata),
        fields(
            id = ?staff.id,
            correlation_id = OperationMetadata::correlation_id_of(&metadata),
        )
    )]
    async fn update(
        &self,
        mut staff: Staff,
        metadata: Option<OperationMetadata>,
    ) -> Result<Staff, PortError> {
        let id = staff
            .id
            .ok_or_else(|| PortError::validation_field("Staff record has no ID", "id"))?;

        let mut records = self.records.write().await;

        let created_at = records
            .get(&id)
            .ok_or_else(|| PortError::not_found("Staff", id))?
            .created_at;

        if records.iter().any(|(other_id, s)| {
            *other_id != id && same_appointment_number(&s.appointment_number, &staff.appointment_number)
        }) {
            return Err(duplicate(&staff.appointment_number));
        }

        staff.created_at = created_at;
        staff.updated_at = Some(Utc::now());
        records.insert(id, staff.clone());
        info!("Staff record updated");
        Ok(staff)
    }

    #[instrument(skip(self, metadata), fields(correlation_id = OperationMetadata::correlation_id_of(&metadata)))]
    async fn delete(
        &self,
        id: StaffId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        match self.records.write().await.remove(&id) {
            Some(_) => {
                info!("Staff record deleted");
                Ok(())
            }
            None => Err(PortError::not_found("Staff", id)),
        }
    }

    #[instrument(skip_all, fields(correlation_id = OperationMetadata::correlation_id_of(&metadata)))]
    async fn search(
        &self,
        search: &StaffSearch,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Staff>, PortError> {
        debug!(?search, "Searching staff records");
        let staff = self
            .records
            .read()
            .await
            .values()
            .filter(|s| search.matches(s))
            .cloned()
            .collect();
        Ok(sorted(staff))
    }

    #[instrument(skip_all, fields(correlation_id = OperationMetadata::correlation_id_of(&metadata)))]
    async fn count(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<StaffCount, PortError> {
        Ok(StaffCount::from_staff(self.records.read().await.values()))
    }

    #[instrument(skip(self, exclude, metadata), fields(correlation_id = OperationMetadata::correlation_id_of(&metadata)))]
    async fn exists_appointment_number(
        &self,
        appointment_number: &str,
        exclude: Option<StaffId>,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError> {
        Ok(self.records.read().await.iter().any(|(id, s)| {
            Some(*id) != exclude && same_appointment_number(&s.appointment_number, appointment_number)
        }))
    }
}
