//! Booking export as a single spreadsheet row.
//!
//! [`compose_booking_row`] flattens a [`BookingRecord`] into fourteen display
//! strings in a fixed column order. Every cell is already formatted text, so
//! the spreadsheet writer never has to interpret a value. The generation date
//! is passed in rather than read from the clock, which keeps the row a pure
//! function of its inputs.

mod xlsx;

use crate::booking::BookingRecord;
use crate::error::ExportError;
use crate::format::{artifact_file_name, format_currency, format_date, Artifact};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Name of the only worksheet in the export.
pub const SHEET_NAME: &str = "Booking Details";

/// Shown when the customer left no phone number.
pub const PHONE_PLACEHOLDER: &str = "N/A";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    CustomerName,
    Email,
    Phone,
    CarBrand,
    CarModel,
    CarName,
    PickupDate,
    ReturnDate,
    PickupLocation,
    ReturnLocation,
    TotalPrice,
    BookingStatus,
    PaymentStatus,
    GeneratedDate,
}

impl Column {
    pub const ALL: [Column; 14] = [
        Column::CustomerName,
        Column::Email,
        Column::Phone,
        Column::CarBrand,
        Column::CarModel,
        Column::CarName,
        Column::PickupDate,
        Column::ReturnDate,
        Column::PickupLocation,
        Column::ReturnLocation,
        Column::TotalPrice,
        Column::BookingStatus,
        Column::PaymentStatus,
        Column::GeneratedDate,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::CustomerName => "Customer Name",
            Column::Email => "Email",
            Column::Phone => "Phone",
            Column::CarBrand => "Car Brand",
            Column::CarModel => "Car Model",
            Column::CarName => "Car Name",
            Column::PickupDate => "Pickup Date",
            Column::ReturnDate => "Return Date",
            Column::PickupLocation => "Pickup Location",
            Column::ReturnLocation => "Return Location",
            Column::TotalPrice => "Total Price",
            Column::BookingStatus => "Booking Status",
            Column::PaymentStatus => "Payment Status",
            Column::GeneratedDate => "Generated Date",
        }
    }

    /// Column width hint, in characters.
    pub fn width(&self) -> u16 {
        match self {
            Column::CustomerName | Column::CarName => 20,
            Column::Email | Column::PickupLocation | Column::ReturnLocation => 25,
            Column::TotalPrice => 12,
            _ => 15,
        }
    }
}

/// One flattened booking, cells in [`Column::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingRow {
    pub booking_id: String,
    cells: Vec<(Column, String)>,
}

impl BookingRow {
    pub fn iter(&self) -> impl Iterator<Item = (Column, &str)> {
        self.cells.iter().map(|(c, v)| (*c, v.as_str()))
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.iter().find(|(c, _)| *c == column).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.cells.iter().map(|(c, _)| c.header()).collect()
    }

    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(|(_, v)| v.as_str()).collect()
    }

    pub fn widths(&self) -> Vec<u16> {
        self.cells.iter().map(|(c, _)| c.width()).collect()
    }

    /// `DriveRent_Booking_<id>.xlsx`
    pub fn file_name(&self) -> String {
        artifact_file_name(&self.booking_id, Artifact::Spreadsheet)
    }

    /// The workbook as bytes: one sheet, a header row and this row beneath it.
    pub fn to_xlsx(&self) -> Result<Vec<u8>, ExportError> {
        xlsx::render(self)
    }

    /// Write the workbook into `dir` under [`BookingRow::file_name`], returning the path written.
    pub fn save_in<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, ExportError> {
        let path = dir.as_ref().join(self.file_name());
        let bytes = self.to_xlsx()?;
        std::fs::write(&path, bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Flatten a booking into a spreadsheet row stamped with `generated_on`.
pub fn compose_booking_row(record: &BookingRecord, generated_on: NaiveDate) -> BookingRow {
    log::debug!("composing spreadsheet row for booking {}", record.booking_id);

    let cells = Column::ALL
        .iter()
        .map(|column| (*column, cell(record, *column, generated_on)))
        .collect();

    BookingRow {
        booking_id: record.booking_id.clone(),
        cells,
    }
}

fn cell(record: &BookingRecord, column: Column, generated_on: NaiveDate) -> String {
    match column {
        Column::CustomerName => record.customer.name.clone(),
        Column::Email => record.customer.email.clone(),
        Column::Phone => record
            .customer
            .phone
            .clone()
            .unwrap_or_else(|| PHONE_PLACEHOLDER.to_string()),
        Column::CarBrand => record.car.brand.clone(),
        Column::CarModel => record.car.model.clone(),
        Column::CarName => record.car.name.clone(),
        Column::PickupDate => format_date(record.pickup_date),
        Column::ReturnDate => format_date(record.dropoff_date),
        Column::PickupLocation => record.pickup_location.clone(),
        Column::ReturnLocation => record.return_location.clone(),
        Column::TotalPrice => format_currency(record.total_price),
        Column::BookingStatus => record.status.to_string(),
        Column::PaymentStatus => record.payment_status.to_string(),
        Column::GeneratedDate => format_date(generated_on),
    }
}
