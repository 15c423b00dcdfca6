//! Date helper handlers

use axum::{extract::State, Json};

use core_kernel::calendar;

use crate::dto::dates::*;
use crate::{error::ApiError, AppState};

/// Age, retirement and service facts for a date of birth
pub async fn derive(
    State(state): State<AppState>,
    Json(request): Json<DeriveDatesRequest>,
) -> Result<Json<DeriveDatesResponse>, ApiError> {
    let today = state.today();
    let retirement_age = state.config.retirement_age;

    let birth = calendar::parse_date(&request.date_of_birth).ok_or_else(|| {
        ApiError::validation(
            "Date of birth is not a valid date",
            vec![request.date_of_birth.clone()],
        )
    })?;

    let years_of_service = request
        .date_of_first_appointment
        .as_deref()
        .and_then(calendar::parse_date)
        .map(|appointment| calendar::years_of_service(appointment, today));

    Ok(Json(DeriveDatesResponse {
        date_of_birth: calendar::format_date(birth),
        age: calendar::calculate_age(birth, today),
        retirement_date: calendar::calculate_retirement_date(birth, retirement_age),
        retires: calendar::retirement_date(birth, retirement_age)
            .map(|date| calendar::relative_time(date, today))
            .unwrap_or_default(),
        near_retirement: calendar::is_near_retirement(birth, retirement_age, today),
        years_of_service,
    }))
}

/// Reformats a typed increment date and checks it
pub async fn increment(
    State(state): State<AppState>,
    Json(request): Json<IncrementDateRequest>,
) -> Json<IncrementDateResponse> {
    let formatted = calendar::auto_format_increment_date(&request.input);

    let response = match calendar::validate_increment_date(&formatted) {
        Ok(increment) => IncrementDateResponse {
            is_valid: true,
            error: None,
            next_occurrence: increment
                .next_occurrence(state.today())
                .map(calendar::format_date),
            formatted,
        },
        Err(e) => IncrementDateResponse {
            is_valid: false,
            error: Some(e.to_string()),
            next_occurrence: None,
            formatted,
        },
    };

    Json(response)
}
