//! The finalized booking handed to both exporters.
//!
//! A [`BookingRecord`] is assembled once by the booking-creation flow, after
//! the payment outcome is known, and is only ever read from here on. Optional
//! customer and car details stay `None` in the record; each exporter picks its
//! own placeholder text when it renders them.

use crate::error::RecordError;
use crate::pricing;
use chrono::NaiveDate;
use derive_builder::Builder;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub name: String,
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub year: Option<i32>,
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub color: Option<String>,
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub plate: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Only used to name the exported files
    pub booking_id: String,
    pub customer: Customer,
    pub car: Car,
    #[serde(deserialize_with = "calendar_date")]
    pub pickup_date: NaiveDate,
    #[serde(deserialize_with = "calendar_date")]
    pub dropoff_date: NaiveDate,
    pub pickup_location: String,
    pub return_location: String,
    pub price_per_day: Decimal,
    #[builder(default)]
    pub total_price: Decimal,
    #[builder(default)]
    #[serde(default)]
    pub status: BookingStatus,
    #[builder(default)]
    #[serde(default)]
    pub payment_status: PaymentStatus,
}

impl BookingRecordBuilder {
    /// Build the record with `total_price` derived from the daily rate and the
    /// rental dates, overriding any total that was set explicitly.
    ///
    /// Fails without producing a record when the rate is not positive.
    pub fn priced(&mut self) -> Result<BookingRecord, RecordError> {
        if let (Some(rate), Some(pickup), Some(dropoff)) =
            (self.price_per_day, self.pickup_date, self.dropoff_date)
        {
            self.total_price = Some(pricing::total_for_dates(rate, pickup, dropoff)?);
        }
        Ok(self.build()?)
    }
}

impl BookingRecord {
    /// Number of charged nights between pickup and dropoff, never less than one.
    pub fn nights(&self) -> i64 {
        pricing::nights_between(self.pickup_date, self.dropoff_date)
    }

    /// Whether `total_price` matches what the price calculator would charge.
    pub fn is_price_consistent(&self) -> bool {
        match pricing::total_for_dates(self.price_per_day, self.pickup_date, self.dropoff_date) {
            Ok(expected) => expected == self.total_price,
            Err(_) => false,
        }
    }
}

/// Read a date written either as a `YYYY-MM-DD` string or as a bare TOML
/// date. TOML date-times keep only their date part.
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::String(s) => s.trim().parse().map_err(de::Error::custom),
        toml::Value::Datetime(datetime) => {
            let date = datetime
                .date
                .ok_or_else(|| de::Error::custom(format!("{datetime} has no date")))?;
            NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                .ok_or_else(|| de::Error::custom(format!("{date} is not a calendar date")))
        }
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(other.type_str()),
            &"a date",
        )),
    }
}

/// How a status value should be presented: good news, waiting, or a problem.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Positive,
    Pending,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    /// Anything the storefront sent that we don't recognise, kept verbatim
    Unknown(String),
}

impl BookingStatus {
    pub fn tone(&self) -> StatusTone {
        match self {
            BookingStatus::Confirmed => StatusTone::Positive,
            BookingStatus::Pending => StatusTone::Pending,
            _ => StatusTone::Negative,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
            BookingStatus::Unknown(s) => s,
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            "completed" => BookingStatus::Completed,
            _ => BookingStatus::Unknown(s.to_string()),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        BookingStatus::from(s.as_str())
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.label().to_string()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
    Failed,
    Unknown(String),
}

impl PaymentStatus {
    pub fn tone(&self) -> StatusTone {
        match self {
            PaymentStatus::Paid => StatusTone::Positive,
            PaymentStatus::Pending => StatusTone::Pending,
            _ => StatusTone::Negative,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Unknown(s) => s,
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => PaymentStatus::Pending,
            "paid" => PaymentStatus::Paid,
            "refunded" => PaymentStatus::Refunded,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Unknown(s.to_string()),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        PaymentStatus::from(s.as_str())
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.label().to_string()
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
