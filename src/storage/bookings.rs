use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};

use crate::domain::NewBooking;
use crate::storage::{BookingStore, StoreError};

/// `BookingStore` backed by the pre-existing `bookings` table in Postgres.
#[derive(Clone, Debug)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert(&self, booking: &NewBooking) -> Result<(), StoreError> {
        insert_booking(&self.pool, booking).await?;
        Ok(())
    }
}

#[tracing::instrument(name = "Saving new booking details in the database", skip(executor, booking))]
pub async fn insert_booking(
    executor: impl PgExecutor<'_>,
    booking: &NewBooking,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
    INSERT INTO bookings (name, email, phone, booking_time)
    VALUES ($1, $2, $3, $4)
    "#,
    )
    .bind(&booking.name)
    .bind(&booking.email)
    .bind(&booking.phone)
    .bind(&booking.booking_time)
    .execute(executor)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;

    Ok(())
}
