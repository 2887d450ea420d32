pub mod new_booking;
pub mod phone_number;

pub use new_booking::{BookingForm, MissingFields, NewBooking};
pub use phone_number::normalize_phone;
