use crate::models::{Booking, CreateBookingRequest};

/// Admin notice sent on every successful intake. Carries all submitted
/// fields; the aadhar line appears only when one was given.
pub fn admin_new_booking(req: &CreateBookingRequest) -> (String, String) {
    let subject = format!("NEW ROAD ROAM BOOKING: {}", req.rental_service_name);

    let aadhar_line = match req.aadhar_number.as_deref() {
        Some(aadhar) if !aadhar.is_empty() => format!("<p>Aadhar: {aadhar}</p>"),
        _ => String::new(),
    };

    let body = format!(
        "<h1>New Booking Received!</h1>\
         <p>Service: <strong>{service}</strong></p>\
         <p>Car: {car}</p>\
         <p>Name: {name}</p>\
         <p>Email: {email}</p>\
         <p>Phone: {phone}</p>\
         <p>Passengers: {passengers}</p>\
         <p>Dates: {pickup} to {ret}</p>\
         <p>Location: {location}</p>\
         {aadhar_line}",
        service = req.rental_service_name,
        car = req.car_model,
        name = req.full_name,
        email = req.email,
        phone = req.phone_number,
        passengers = req.passengers,
        pickup = req.pickup_date,
        ret = req.return_date,
        location = req.pickup_location,
    );

    (subject, body)
}

pub fn booking_confirmed(booking: &Booking) -> (String, String) {
    let subject = format!(
        "Your Road Roam booking is confirmed: {}",
        booking.rental_service_name
    );

    let body = format!(
        "<h1>Booking Confirmed!</h1>\
         <p>Hi {name}, your booking is confirmed.</p>\
         <p>Service: <strong>{service}</strong></p>\
         <p>Car: {car}</p>\
         <p>Pickup: {pickup} at {location}</p>\
         <p>See you on the road!</p>",
        name = booking.full_name,
        service = booking.rental_service_name,
        car = booking.car_model,
        pickup = booking.pickup_date,
        location = booking.pickup_location,
    );

    (subject, body)
}

pub fn booking_cancelled(booking: &Booking) -> (String, String) {
    let subject = "Your Road Roam booking has been cancelled".to_string();

    let body = format!(
        "<h1>Booking Cancelled</h1>\
         <p>Hi {name}, your booking has been cancelled.</p>\
         <p>If this was a mistake, please reach out to us.</p>",
        name = booking.full_name,
    );

    (subject, body)
}
