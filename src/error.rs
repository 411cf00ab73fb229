use rust_decimal::Decimal;
use std::path::PathBuf;

/// Rejections raised by the price calculator.
///
/// These stop a booking from being constructed; no fallback price is ever
/// substituted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("invalid date '{0}': expected YYYY-MM-DD, YYYY-MM-DDTHH:MM or an RFC 3339 timestamp")]
    InvalidDate(String),
    #[error("invalid daily rate {0}: must be greater than zero")]
    InvalidRate(Decimal),
}

/// Failures while turning a composed artifact into bytes on disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build spreadsheet")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// Failures while assembling a [`crate::BookingRecord`] through its builder.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error(transparent)]
    Incomplete(#[from] crate::booking::BookingRecordBuilderError),
}
