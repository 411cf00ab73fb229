//! Display formatting shared by both exporters.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Prefix of every exported file name.
pub const FILE_PREFIX: &str = "DriveRent_Booking_";

/// Kind of artifact written for a booking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Artifact {
    Document,
    Spreadsheet,
}

impl Artifact {
    pub fn extension(&self) -> &'static str {
        match self {
            Artifact::Document => "pdf",
            Artifact::Spreadsheet => "xlsx",
        }
    }
}

/// `DriveRent_Booking_<id>.<ext>`
///
/// Path separators and other characters that aren't allowed in file names
/// are replaced with `_`, so the name always stays a single path component.
pub fn artifact_file_name(booking_id: &str, artifact: Artifact) -> String {
    let id: String = booking_id
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{FILE_PREFIX}{id}.{}", artifact.extension())
}

/// Dollar amount with two decimals and no thousands separator, e.g. `$1234.50`.
pub fn format_currency(amount: Decimal) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount.abs())
    }
}

/// Calendar date as month/day/year without padding, e.g. `1/10/2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_has_two_decimals_and_no_grouping() {
        assert_eq!(format_currency(dec!(150)), "$150.00");
        assert_eq!(format_currency(dec!(1234567.5)), "$1234567.50");
        assert_eq!(format_currency(dec!(0.125)), "$0.13");
        assert_eq!(format_currency(dec!(-12.3)), "-$12.30");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn dates_are_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "1/5/2024");
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_date(date), "12/25/2024");
    }

    #[test]
    fn file_names_follow_convention() {
        assert_eq!(
            artifact_file_name("BK-1", Artifact::Document),
            "DriveRent_Booking_BK-1.pdf"
        );
        assert_eq!(
            artifact_file_name("BK-1", Artifact::Spreadsheet),
            "DriveRent_Booking_BK-1.xlsx"
        );
    }

    #[test]
    fn file_names_never_contain_separators() {
        assert_eq!(
            artifact_file_name("a/b\\c", Artifact::Document),
            "DriveRent_Booking_a_b_c.pdf"
        );
        assert_eq!(
            artifact_file_name("../../etc/passwd", Artifact::Spreadsheet),
            "DriveRent_Booking_.._.._etc_passwd.xlsx"
        );
        assert_eq!(
            artifact_file_name("C:12\t?", Artifact::Document),
            "DriveRent_Booking_C_12__.pdf"
        );
    }
}
