use crate::models::Booking;

const HEADER: [&str; 15] = [
    "id",
    "full_name",
    "email",
    "phone_number",
    "aadhar_number",
    "rental_service_name",
    "car_model",
    "pickup_date",
    "return_date",
    "pickup_location",
    "pickup_lat",
    "pickup_lng",
    "passengers",
    "status",
    "created_at",
];

/// Renders the full dump as CSV with a header row. Every field is quoted so
/// free-text columns (addresses, names) survive any spreadsheet import.
pub fn to_csv(bookings: &[Booking]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(vec![]);

    writer.write_record(HEADER)?;

    for b in bookings {
        writer.write_record([
            b.id.to_string(),
            b.full_name.clone(),
            b.email.clone(),
            b.phone_number.clone(),
            b.aadhar_number.clone().unwrap_or_default(),
            b.rental_service_name.clone(),
            b.car_model.clone(),
            b.pickup_date.to_string(),
            b.return_date.to_string(),
            b.pickup_location.clone(),
            b.pickup_lat.map(|v| v.to_string()).unwrap_or_default(),
            b.pickup_lng.map(|v| v.to_string()).unwrap_or_default(),
            b.passengers.to_string(),
            b.status.as_str().to_string(),
            b.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush csv: {}", e.error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use chrono::NaiveDate;

    fn booking() -> Booking {
        Booking {
            id: 7,
            full_name: "Asha Rao".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "9876543210".to_string(),
            aadhar_number: None,
            rental_service_name: "Tours & Trips".to_string(),
            car_model: "Innova".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            pickup_location: "12, MG Road, Bengaluru".to_string(),
            pickup_lat: Some(12.9716),
            pickup_lng: Some(77.5946),
            passengers: 4,
            status: BookingStatus::Pending,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_header_row_present() {
        let data = to_csv(&[booking()]).unwrap();
        let text = String::from_utf8(data).unwrap();
        let first_line = text.lines().next().unwrap();
        assert!(first_line.contains("\"id\""));
        assert!(first_line.contains("\"aadhar_number\""));
        assert!(first_line.contains("\"created_at\""));
    }

    #[test]
    fn test_every_field_quoted() {
        let data = to_csv(&[booking()]).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert!(text.contains("\"7\""));
        assert!(text.contains("\"Asha Rao\""));
        assert!(text.contains("\"PENDING\""));
        assert!(text.contains("\"2025-01-01 09:30:00\""));
        // Commas inside a field stay inside its quotes.
        assert!(text.contains("\"12, MG Road, Bengaluru\""));
    }

    #[test]
    fn test_absent_optionals_render_empty() {
        let mut b = booking();
        b.pickup_lat = None;
        b.pickup_lng = None;
        let data = to_csv(&[b]).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert!(text.contains("\"\",\"\",\"4\""));
    }

    #[test]
    fn test_row_per_booking() {
        let data = to_csv(&[booking(), booking()]).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
