use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingStatus, BookingSummary, CreateBookingRequest};

const SUMMARY_COLUMNS: &str =
    "id, full_name, rental_service_name, car_model, pickup_date, status, created_at";

const ALL_COLUMNS: &str = "id, full_name, email, phone_number, aadhar_number, \
     rental_service_name, car_model, pickup_date, return_date, pickup_location, \
     pickup_lat, pickup_lng, passengers, status, created_at";

// `status` and `created_at` are left to their column defaults so the store
// owns both: every new booking starts PENDING with a store-assigned timestamp.
pub fn insert_booking(conn: &Connection, req: &CreateBookingRequest) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO bookings (full_name, email, phone_number, aadhar_number,
             rental_service_name, car_model, pickup_date, return_date,
             pickup_location, pickup_lat, pickup_lng, passengers)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            req.full_name,
            req.email,
            req.phone_number,
            req.aadhar_number,
            req.rental_service_name,
            req.car_model,
            req.pickup_date.to_string(),
            req.return_date.to_string(),
            req.pickup_location,
            req.pickup_lat,
            req.pickup_lng,
            req.passengers,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_booking_summaries(conn: &Connection) -> rusqlite::Result<Vec<BookingSummary>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SUMMARY_COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt.query_map([], |row| {
        Ok(BookingSummary {
            id: row.get(0)?,
            full_name: row.get(1)?,
            rental_service_name: row.get(2)?,
            car_model: row.get(3)?,
            pickup_date: parse_date(&row.get::<_, String>(4)?),
            status: BookingStatus::parse(&row.get::<_, String>(5)?),
            created_at: parse_datetime(&row.get::<_, String>(6)?),
        })
    })?;

    let mut summaries = vec![];
    for row in rows {
        summaries.push(row?);
    }
    Ok(summaries)
}

pub fn get_all_bookings(conn: &Connection) -> rusqlite::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ALL_COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt.query_map([], parse_booking_row)?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row?);
    }
    Ok(bookings)
}

pub fn get_booking_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Booking>> {
    let result = conn.query_row(
        &format!("SELECT {ALL_COLUMNS} FROM bookings WHERE id = ?1"),
        params![id],
        parse_booking_row,
    );

    match result {
        Ok(booking) => Ok(Some(booking)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Writes every mutable column. `id` and `created_at` are never touched.
pub fn update_booking(conn: &Connection, booking: &Booking) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE bookings SET full_name = ?1, email = ?2, phone_number = ?3,
             aadhar_number = ?4, rental_service_name = ?5, car_model = ?6,
             pickup_date = ?7, return_date = ?8, pickup_location = ?9,
             pickup_lat = ?10, pickup_lng = ?11, passengers = ?12, status = ?13
         WHERE id = ?14",
        params![
            booking.full_name,
            booking.email,
            booking.phone_number,
            booking.aadhar_number,
            booking.rental_service_name,
            booking.car_model,
            booking.pickup_date.to_string(),
            booking.return_date.to_string(),
            booking.pickup_location,
            booking.pickup_lat,
            booking.pickup_lng,
            booking.passengers,
            booking.status.as_str(),
            booking.id,
        ],
    )
}

pub fn delete_booking(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let count = conn.execute("DELETE FROM bookings WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

fn parse_booking_row(row: &rusqlite::Row) -> rusqlite::Result<Booking> {
    Ok(Booking {
        id: row.get(0)?,
        full_name: row.get(1)?,
        email: row.get(2)?,
        phone_number: row.get(3)?,
        aadhar_number: row.get(4)?,
        rental_service_name: row.get(5)?,
        car_model: row.get(6)?,
        pickup_date: parse_date(&row.get::<_, String>(7)?),
        return_date: parse_date(&row.get::<_, String>(8)?),
        pickup_location: row.get(9)?,
        pickup_lat: row.get(10)?,
        pickup_lng: row.get(11)?,
        passengers: row.get(12)?,
        status: BookingStatus::parse(&row.get::<_, String>(13)?),
        created_at: parse_datetime(&row.get::<_, String>(14)?),
    })
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|_| Utc::now().date_naive())
}

fn parse_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc())
}
