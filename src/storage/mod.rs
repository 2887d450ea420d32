//! src/storage/mod.rs

mod bookings;

pub use bookings::{insert_booking, PgBookingStore};

use std::fmt::Formatter;

use async_trait::async_trait;

use crate::domain::NewBooking;
use crate::utils::error_helpers::error_chain_fmt;

/// Somewhere accepted bookings are written to. Nothing is ever read back.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Writes one row for `booking`.
    async fn insert(&self, booking: &NewBooking) -> Result<(), StoreError>;
}

#[derive(thiserror::Error)]
#[error("Failed to store the booking")]
pub struct StoreError(#[from] sqlx::Error);

impl StoreError {
    /// Error details echoed back to the caller alongside a 500.
    ///
    /// `code` is the SQLSTATE when the database itself rejected the row.
    pub fn detail(&self) -> serde_json::Value {
        let mut detail = serde_json::json!({ "message": self.0.to_string() });
        if let sqlx::Error::Database(e) = &self.0 {
            if let Some(code) = e.code() {
                detail["code"] = code.into_owned().into();
            }
        }
        detail
    }
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
