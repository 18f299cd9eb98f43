use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::errors::AppError;
use crate::models::{Booking, BookingSummary, UpdateBookingRequest};
use crate::services::booking::{self, UpdateOutcome};
use crate::services::export;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingSummary>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let summaries = booking::list_summaries(&state)?;
    Ok(Json(summaries))
}

// GET /api/admin/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let record = booking::get_by_id(&state, id)?;
    Ok(Json(record))
}

// PATCH /api/admin/bookings/:id
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<UpdateBookingRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let message = match booking::update(&state, id, body).await? {
        UpdateOutcome::Updated => format!("Booking {id} details updated."),
        UpdateOutcome::NoChanges => "No changes made.".to_string(),
    };

    Ok(Json(serde_json::json!({"message": message})))
}

// DELETE /api/admin/bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    booking::delete(&state, id)?;

    Ok(Json(serde_json::json!({
        "message": format!("Booking {id} permanently deleted.")
    })))
}

// GET /api/admin/export
pub async fn export_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let bookings = booking::export_all(&state)?;
    let data = export::to_csv(&bookings)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"bookings.csv\"",
            ),
        ],
        data,
    )
        .into_response())
}
