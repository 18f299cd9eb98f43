use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub aadhar_number: Option<String>,
    pub rental_service_name: String,
    pub car_model: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub pickup_location: String,
    pub pickup_lat: Option<f64>,
    pub pickup_lng: Option<f64>,
    pub passengers: i64,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

/// Listing-safe projection: excludes contact and identity fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: i64,
    pub full_name: String,
    pub rental_service_name: String,
    pub car_model: String,
    pub pickup_date: NaiveDate,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "CONFIRMED" => BookingStatus::Confirmed,
            "CANCELLED" => BookingStatus::Cancelled,
            "COMPLETED" => BookingStatus::Completed,
            _ => BookingStatus::Pending,
        }
    }
}

/// Body of `POST /api/bookings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub aadhar_number: Option<String>,
    pub rental_service_name: String,
    pub car_model: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub pickup_location: String,
    #[serde(default)]
    pub pickup_lat: Option<f64>,
    #[serde(default)]
    pub pickup_lng: Option<f64>,
    pub passengers: i64,
}

/// Body of `PATCH /api/admin/bookings/:id`. Absent fields keep their stored
/// values; present fields overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub aadhar_number: Option<String>,
    pub rental_service_name: Option<String>,
    pub car_model: Option<String>,
    pub pickup_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub pickup_location: Option<String>,
    pub pickup_lat: Option<f64>,
    pub pickup_lng: Option<f64>,
    pub passengers: Option<i64>,
    pub status: Option<BookingStatus>,
}
