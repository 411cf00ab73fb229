//! Pricing and confirmation exports for DriveRent bookings.
//!
//! Three entry points make up the engine:
//!
//! - [`calculate_total_price`] turns a daily rate and a pickup/dropoff pair
//!   into the amount charged, and is used while a booking is being created.
//! - [`compose_booking_document`] lays a finished [`BookingRecord`] out as a
//!   one-page confirmation that can be written as PDF.
//! - [`compose_booking_row`] flattens the same record into a single
//!   spreadsheet row that can be written as XLSX.
//!
//! All three are pure: they read their arguments, touch no global state and
//! never do I/O on their own. Saving the artifacts is up to the caller.

pub mod booking;
pub mod config;
pub mod document;
mod error;
pub mod format;
pub mod pricing;
pub mod tabular;

pub use booking::{
    BookingRecord, BookingRecordBuilder, BookingStatus, Car, CarBuilder, Customer,
    CustomerBuilder, PaymentStatus, StatusTone,
};
pub use document::{compose_booking_document, Document};
pub use error::{ExportError, PricingError, RecordError};
pub use pricing::calculate_total_price;
pub use tabular::{compose_booking_row, BookingRow, Column};
