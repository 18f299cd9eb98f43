use std::sync::Arc;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{
    Booking, BookingStatus, BookingSummary, CreateBookingRequest, UpdateBookingRequest,
};
use crate::services::{notifications, validation};
use crate::state::AppState;

pub enum UpdateOutcome {
    Updated,
    NoChanges,
}

/// Validate, insert, then notify the operations address in the background.
/// The notice is best-effort: a send failure is logged and the caller still
/// gets the new id.
pub async fn create(state: &Arc<AppState>, req: CreateBookingRequest) -> Result<i64, AppError> {
    validation::validate(&req, &state.catalog)?;

    let id = {
        let db = state.db.lock().unwrap();
        queries::insert_booking(&db, &req)?
    };

    tracing::info!(id, service = %req.rental_service_name, "booking created");

    let state = Arc::clone(state);
    tokio::spawn(async move {
        let (subject, body) = notifications::admin_new_booking(&req);
        if let Err(e) = state
            .email
            .send(&state.config.admin_email, &subject, &body)
            .await
        {
            tracing::error!(error = %e, "failed to send admin booking notification");
        }
    });

    Ok(id)
}

pub fn list_summaries(state: &Arc<AppState>) -> Result<Vec<BookingSummary>, AppError> {
    let db = state.db.lock().unwrap();
    Ok(queries::list_booking_summaries(&db)?)
}

pub fn get_by_id(state: &Arc<AppState>, id: i64) -> Result<Booking, AppError> {
    let db = state.db.lock().unwrap();
    queries::get_booking_by_id(&db, id)?
        .ok_or_else(|| AppError::NotFound("Booking not found.".to_string()))
}

/// Partial update: fields present in the patch overwrite, absent fields keep
/// their stored values. A status change on the PENDING→CONFIRMED or
/// *→CANCELLED edge sends the matching customer email; that send is
/// load-bearing, so its failure is surfaced even though the row change is
/// already committed.
pub async fn update(
    state: &Arc<AppState>,
    id: i64,
    patch: UpdateBookingRequest,
) -> Result<UpdateOutcome, AppError> {
    let (previous_status, updated, rows_affected) = {
        let db = state.db.lock().unwrap();
        let existing = queries::get_booking_by_id(&db, id)?
            .ok_or_else(|| AppError::NotFound("Booking not found.".to_string()))?;

        let previous_status = existing.status;
        let updated = apply_patch(existing, patch);
        let rows_affected = queries::update_booking(&db, &updated)?;
        (previous_status, updated, rows_affected)
    };

    match (previous_status, updated.status) {
        (BookingStatus::Pending, BookingStatus::Confirmed) => {
            tracing::info!(id, "booking confirmed, sending confirmation email");
            let (subject, body) = notifications::booking_confirmed(&updated);
            send_transition_email(state, &updated.email, &subject, &body).await?;
        }
        (previous, BookingStatus::Cancelled) if previous != BookingStatus::Cancelled => {
            tracing::info!(id, "booking cancelled, sending cancellation email");
            let (subject, body) = notifications::booking_cancelled(&updated);
            send_transition_email(state, &updated.email, &subject, &body).await?;
        }
        _ => {}
    }

    if rows_affected == 0 {
        Ok(UpdateOutcome::NoChanges)
    } else {
        Ok(UpdateOutcome::Updated)
    }
}

async fn send_transition_email(
    state: &Arc<AppState>,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<(), AppError> {
    if !state.email.is_configured() {
        return Err(AppError::Config(
            "email provider credential is missing".to_string(),
        ));
    }

    state
        .email
        .send(to, subject, body)
        .await
        .map_err(|e| AppError::Email(e.to_string()))
}

pub fn delete(state: &Arc<AppState>, id: i64) -> Result<(), AppError> {
    let db = state.db.lock().unwrap();
    if queries::delete_booking(&db, id)? {
        Ok(())
    } else {
        Err(AppError::NotFound("Booking not found.".to_string()))
    }
}

/// Full dump for the export endpoint; shares the read path and ordering of
/// the listing. An empty store is a not-found, not an empty file.
pub fn export_all(state: &Arc<AppState>) -> Result<Vec<Booking>, AppError> {
    let db = state.db.lock().unwrap();
    let bookings = queries::get_all_bookings(&db)?;
    if bookings.is_empty() {
        return Err(AppError::NotFound("No bookings to export.".to_string()));
    }
    Ok(bookings)
}

fn apply_patch(existing: Booking, patch: UpdateBookingRequest) -> Booking {
    Booking {
        id: existing.id,
        full_name: patch.full_name.unwrap_or(existing.full_name),
        email: patch.email.unwrap_or(existing.email),
        phone_number: patch.phone_number.unwrap_or(existing.phone_number),
        aadhar_number: patch.aadhar_number.or(existing.aadhar_number),
        rental_service_name: patch
            .rental_service_name
            .unwrap_or(existing.rental_service_name),
        car_model: patch.car_model.unwrap_or(existing.car_model),
        pickup_date: patch.pickup_date.unwrap_or(existing.pickup_date),
        return_date: patch.return_date.unwrap_or(existing.return_date),
        pickup_location: patch.pickup_location.unwrap_or(existing.pickup_location),
        pickup_lat: patch.pickup_lat.or(existing.pickup_lat),
        pickup_lng: patch.pickup_lng.or(existing.pickup_lng),
        passengers: patch.passengers.unwrap_or(existing.passengers),
        status: patch.status.unwrap_or(existing.status),
        created_at: existing.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking() -> Booking {
        Booking {
            id: 1,
            full_name: "Asha Rao".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "9876543210".to_string(),
            aadhar_number: Some("123456789012".to_string()),
            rental_service_name: "City Cruise".to_string(),
            car_model: "Dzire".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            pickup_location: "MG Road".to_string(),
            pickup_lat: None,
            pickup_lng: None,
            passengers: 2,
            status: BookingStatus::Pending,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let before = booking();
        let after = apply_patch(before.clone(), UpdateBookingRequest::default());
        assert_eq!(after.full_name, before.full_name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.phone_number, before.phone_number);
        assert_eq!(after.aadhar_number, before.aadhar_number);
        assert_eq!(after.status, before.status);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn test_status_only_patch_keeps_other_fields() {
        let before = booking();
        let after = apply_patch(
            before.clone(),
            UpdateBookingRequest {
                status: Some(BookingStatus::Confirmed),
                ..Default::default()
            },
        );
        assert_eq!(after.status, BookingStatus::Confirmed);
        assert_eq!(after.full_name, before.full_name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.pickup_location, before.pickup_location);
    }

    #[test]
    fn test_patch_overwrites_present_fields() {
        let after = apply_patch(
            booking(),
            UpdateBookingRequest {
                full_name: Some("Ravi Kumar".to_string()),
                passengers: Some(4),
                ..Default::default()
            },
        );
        assert_eq!(after.full_name, "Ravi Kumar");
        assert_eq!(after.passengers, 4);
        assert_eq!(after.car_model, "Dzire");
    }

    #[test]
    fn test_patch_never_touches_id_or_created_at() {
        let before = booking();
        let after = apply_patch(
            before.clone(),
            UpdateBookingRequest {
                full_name: Some("Someone Else".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
    }
}
