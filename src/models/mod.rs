pub mod booking;

pub use booking::{
    Booking, BookingStatus, BookingSummary, CreateBookingRequest, UpdateBookingRequest,
};
