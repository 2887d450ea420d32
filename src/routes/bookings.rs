use std::fmt::Formatter;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::domain::{BookingForm, MissingFields, NewBooking};
use crate::storage::{BookingStore, StoreError};
use crate::utils::error_helpers::error_chain_fmt;
use crate::webhook::{Relay, WebhookPayload};

#[derive(thiserror::Error)]
pub enum BookingError {
    #[error("Missing fields")]
    MissingFields(#[from] MissingFields),

    #[error("Invalid request body")]
    InvalidBody(#[source] JsonPayloadError),

    #[error("Database error")]
    Database(#[source] StoreError),
}

impl std::fmt::Debug for BookingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookingError::MissingFields(_) | BookingError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::json!({ "message": self.to_string() });
        if let BookingError::Database(e) = self {
            body["error"] = e.detail();
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Turns extractor failures on `web::Json` into the same JSON error shape the
/// handler uses.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    BookingError::InvalidBody(err).into()
}

#[tracing::instrument(
    name = "Adding a new booking",
    skip(form, store, relay),
    fields(
        booking_email = ?form.email,
        booking_time = ?form.booking_time,
    )
)]
pub async fn create_booking(
    form: web::Json<BookingForm>,
    store: web::Data<dyn BookingStore>,
    relay: web::Data<dyn Relay>,
) -> Result<HttpResponse, BookingError> {
    submit_booking(store.get_ref(), relay.get_ref(), form.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Success" })))
}

/// Validates, stores and relays one submission.
///
/// The relay only runs after the row is stored, and whatever it reports is
/// dropped: a booking that reached the database is a success for the caller.
pub async fn submit_booking(
    store: &dyn BookingStore,
    relay: &dyn Relay,
    form: BookingForm,
) -> Result<(), BookingError> {
    let booking = NewBooking::try_from(form).map_err(|e| {
        tracing::info!(missing = %e, "Rejecting incomplete booking");
        BookingError::from(e)
    })?;

    store
        .insert(&booking)
        .await
        .map_err(BookingError::Database)?;

    let payload = WebhookPayload::from(&booking);
    if let Err(e) = relay.deliver(&payload).await {
        tracing::debug!(error.cause_chain = ?e, "Webhook delivery did not complete");
    }

    Ok(())
}
