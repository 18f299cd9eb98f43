use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::models::CreateBookingRequest;
use crate::services::booking;
use crate::state::AppState;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let id = booking::create(&state, body).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"id": id, "message": "Booking received."})),
    ))
}
