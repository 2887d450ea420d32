//! src/webhook/mod.rs

mod client;

pub use client::WebhookClient;

use async_trait::async_trait;

use crate::domain::{normalize_phone, NewBooking};

/// JSON body relayed to the automation webhook.
#[derive(serde::Serialize, Debug, PartialEq, Eq)]
pub struct WebhookPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: String,
    pub booking_time: &'a str,
}

impl<'a> From<&'a NewBooking> for WebhookPayload<'a> {
    fn from(booking: &'a NewBooking) -> Self {
        Self {
            name: &booking.name,
            email: &booking.email,
            phone: normalize_phone(&booking.phone),
            booking_time: &booking.booking_time,
        }
    }
}

/// Forwards stored bookings to whatever automation sits downstream.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn deliver(&self, payload: &WebhookPayload<'_>) -> Result<(), anyhow::Error>;
}
