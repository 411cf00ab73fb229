use super::{BookingRow, SHEET_NAME};
use crate::error::ExportError;
use rust_xlsxwriter::{Format, Workbook};

pub fn render(row: &BookingRow) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    for (i, (column, value)) in row.iter().enumerate() {
        let col = i as u16;
        worksheet.write_string_with_format(0, col, column.header(), &header)?;
        worksheet.write_string(1, col, value)?;
        worksheet.set_column_width(col, column.width())?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod test {
    use crate::booking::test::sample_record;
    use crate::tabular::compose_booking_row;
    use chrono::NaiveDate;

    #[test]
    fn writes_a_zip_container() {
        let row = compose_booking_row(
            &sample_record(),
            NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
        );
        let bytes = row.to_xlsx().expect("can build workbook");
        assert!(bytes.starts_with(b"PK"));
    }
}
