//! Staff handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use core_kernel::StaffId;
use domain_staff::{sort_staff, BulkDeleteOutcome, Staff, StaffCount, StaffSearch};

use crate::dto::staff::*;
use crate::middleware::RequestMetadata;
use crate::{error::ApiError, AppState};

fn parse_id(id: &str) -> Result<StaffId, ApiError> {
    id.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid staff id: {id}")))
}

fn responses(staff: Vec<Staff>) -> Vec<StaffResponse> {
    staff.into_iter().map(StaffResponse::from).collect()
}

/// Adds a staff member
pub async fn add_staff(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Json(request): Json<Staff>,
) -> Result<(StatusCode, Json<StaffResponse>), ApiError> {
    let service = state.service.with_metadata(metadata);
    let created = service.add_staff(request, state.today()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Lists staff, ordered by name unless a sort is given
pub async fn list_staff(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Query(query): Query<ListStaffQuery>,
) -> Result<Json<Vec<StaffResponse>>, ApiError> {
    let service = state.service.with_metadata(metadata);
    let mut staff = match query.filter {
        Some(filter) => service.quick_filter(filter, state.today()).await?,
        None => service.list_staff().await?,
    };

    if let Some(q) = query.q.as_deref() {
        let search = StaffSearch::by_query(q);
        staff.retain(|s| search.matches(s));
    }
    if let Some(field) = query.sort {
        sort_staff(&mut staff, field, query.direction);
    }

    Ok(Json(responses(staff)))
}

/// Gets a staff member by ID
pub async fn get_staff(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
) -> Result<Json<StaffResponse>, ApiError> {
    let id = parse_id(&id)?;
    let service = state.service.with_metadata(metadata);
    Ok(Json(service.get_staff(id).await?.into()))
}

/// Replaces a staff member's record
pub async fn update_staff(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
    Json(mut request): Json<Staff>,
) -> Result<Json<StaffResponse>, ApiError> {
    request.id = Some(parse_id(&id)?);
    let service = state.service.with_metadata(metadata);
    let updated = service.update_staff(request, state.today()).await?;
    Ok(Json(updated.into()))
}

/// Deletes a staff member
pub async fn delete_staff(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.service.with_metadata(metadata).delete_staff(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes several staff members, reporting the ones that failed
pub async fn delete_many(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Json(request): Json<BulkDeleteRequest>,
) -> Json<BulkDeleteOutcome> {
    let service = state.service.with_metadata(metadata);
    Json(service.delete_many(&request.ids).await)
}

/// Searches staff
pub async fn search_staff(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Json(search): Json<StaffSearch>,
) -> Result<Json<Vec<StaffResponse>>, ApiError> {
    let staff = state.service.with_metadata(metadata).search_staff(&search).await?;
    Ok(Json(responses(staff)))
}

/// Head counts by designation and gender
pub async fn statistics(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
) -> Result<Json<StaffCount>, ApiError> {
    Ok(Json(state.service.with_metadata(metadata).statistics().await?))
}

/// Auto-fills and validates a draft without saving it
pub async fn prepare_staff(
    State(state): State<AppState>,
    Json(request): Json<Staff>,
) -> Json<PrepareStaffResponse> {
    let (staff, result) = state.service.prepare(request, state.today());
    Json(PrepareStaffResponse::new(staff, result))
}
