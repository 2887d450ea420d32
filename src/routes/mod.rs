pub mod bookings;
pub mod health;
pub mod waiver_form;

pub use bookings::{create_booking, json_error_handler};
pub use health::health_check;
pub use waiver_form::waiver_form;
