//! Store Test Utilities
//!
//! A store that records the metadata each call arrives with, for checking
//! that request IDs make it from the bridge down to the store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError, StaffId};
use domain_staff::{InMemoryStaffStore, Staff, StaffCount, StaffPort, StaffSearch};

/// One store call as seen by [`RecordingStaffStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub correlation_id: Option<String>,
}

/// In-memory store that logs every call before delegating
#[derive(Debug, Clone, Default)]
pub struct RecordingStaffStore {
    inner: InMemoryStaffStore,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingStaffStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls in the order they were made
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Correlation IDs of the calls made for `operation`
    pub fn correlation_ids(&self, operation: &str) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter(|c| c.operation == operation)
            .map(|c| c.correlation_id)
            .collect()
    }

    fn record(&self, operation: &'static str, metadata: &Option<OperationMetadata>) {
        self.calls.lock().unwrap().push(RecordedCall {
            operation,
            correlation_id: metadata.as_ref().and_then(|m| m.correlation_id.clone()),
        });
    }
}

impl DomainPort for RecordingStaffStore {}

#[async_trait]
impl HealthCheckable for RecordingStaffStore {
    async fn health_check(&self) -> HealthCheckResult {
        self.inner.health_check().await
    }
}

#[async_trait]
impl StaffPort for RecordingStaffStore {
    async fn create(&self, staff: Staff, metadata: Option<OperationMetadata>) -> Result<Staff, PortError> {
        self.record("create", &metadata);
        self.inner.create(staff, metadata).await
    }

    async fn get(&self, id: StaffId, metadata: Option<OperationMetadata>) -> Result<Staff, PortError> {
        self.record("get", &metadata);
        self.inner.get(id, metadata).await
    }

    async fn list_all(&self, metadata: Option<OperationMetadata>) -> Result<Vec<Staff>, PortError> {
        self.record("list_all", &metadata);
        self.inner.list_all(metadata).await
    }

    async fn update(&self, staff: Staff, metadata: Option<OperationMetadata>) -> Result<Staff, PortError> {
        self.record("update", &metadata);
        self.inner.update(staff, metadata).await
    }

    async fn delete(&self, id: StaffId, metadata: Option<OperationMetadata>) -> Result<(), PortError> {
        self.record("delete", &metadata);
        self.inner.delete(id, metadata).await
    }

    async fn search(
        &self,
        search: &StaffSearch,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Staff>, PortError> {
        self.record("search", &metadata);
        self.inner.search(search, metadata).await
    }

    async fn count(&self, metadata: Option<OperationMetadata>) -> Result<StaffCount, PortError> {
        self.record("count", &metadata);
        self.inner.count(metadata).await
    }

    async fn exists_appointment_number(
        &self,
        appointment_number: &str,
        exclude: Option<StaffId>,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError> {
        self.record("exists_appointment_number", &metadata);
        self.inner
            .exists_appointment_number(appointment_number, exclude, metadata)
            .await
    }
}
