//! NIC handlers

use axum::{extract::State, Json};

use domain_nic as nic;

use crate::dto::nic::*;
use crate::{error::ApiError, AppState};

/// Strict normalize; an unusable number is a 422 naming the failed check
pub async fn normalize(Json(request): Json<NicRequest>) -> Result<Json<NormalizeResponse>, ApiError> {
    let normalized = nic::normalize(&request.nic)?;
    Ok(Json(NormalizeResponse {
        formatted: nic::format_nic(&normalized),
        normalized,
    }))
}

/// Lenient decode, never an error
pub async fn decode(
    State(state): State<AppState>,
    Json(request): Json<NicRequest>,
) -> Json<DecodeResponse> {
    let today = state.today();
    Json(DecodeResponse {
        info: nic::decode(&request.nic, today),
        birth_date: nic::birth_date_of(&request.nic, today),
        age: nic::age_of(&request.nic, today),
    })
}
