//! src/domain/new_booking.rs

/// A booking that passed the presence check and may be stored.
///
/// Values are kept exactly as submitted. `phone` is the customer's own text and
/// `booking_time` is the `YYYY-MM-DDTHH:MM` string built by the form, neither is
/// parsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub booking_time: String,
}

/// JSON body accepted by `POST /api/bookings`.
///
/// Falsy JSON values (`null`, `false`, `0`, `""`) read as absent. Any other
/// value that is not a string makes the body unreadable.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub booking_time: Option<String>,
}

fn falsy_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Deserialize, Error, Unexpected};
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::Bool(true) => Err(D::Error::invalid_type(Unexpected::Bool(true), &"a string")),
        Value::Number(_) => Err(D::Error::invalid_type(
            Unexpected::Other("a number"),
            &"a string",
        )),
        Value::Array(_) => Err(D::Error::invalid_type(Unexpected::Seq, &"a string")),
        Value::Object(_) => Err(D::Error::invalid_type(Unexpected::Map, &"a string")),
    }
}

/// Names of the form fields that were absent, `null` or empty.
#[derive(Debug, thiserror::Error)]
#[error("missing fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

impl TryFrom<BookingForm> for NewBooking {
    type Error = MissingFields;

    fn try_from(form: BookingForm) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let mut require = |value: Option<String>, field: &'static str| match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(field);
                String::new()
            }
        };

        let name = require(form.name, "name");
        let email = require(form.email, "email");
        let phone = require(form.phone, "phone");
        let booking_time = require(form.booking_time, "bookingTime");

        if !missing.is_empty() {
            return Err(MissingFields(missing));
        }

        Ok(Self {
            name,
            email,
            phone,
            booking_time,
        })
    }
}
