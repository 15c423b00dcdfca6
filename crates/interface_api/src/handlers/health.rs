//! Health and office handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use core_kernel::{AdapterHealth, HealthCheckResult};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: HealthCheckResult,
}

#[derive(Serialize)]
pub struct OfficeResponse {
    pub office_name: String,
    pub retirement_age: u32,
    pub today: String,
}

/// Health check endpoint, including the store's own check
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store = state.service.health().await;
    let (status, label) = match store.status {
        AdapterHealth::Unhealthy => (StatusCode::SERVICE_UNAVAILABLE, "unhealthy"),
        AdapterHealth::Degraded => (StatusCode::OK, "degraded"),
        _ => (StatusCode::OK, "healthy"),
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store,
        }),
    )
}

/// Office details shown on screen headers and print-outs
pub async fn office_info(State(state): State<AppState>) -> Json<OfficeResponse> {
    Json(OfficeResponse {
        office_name: state.config.office_name.clone(),
        retirement_age: state.config.retirement_age,
        today: core_kernel::calendar::format_date(state.today()),
    })
}
