//! Rental pricing.
//!
//! A rental is charged per night: the number of whole days between pickup and
//! dropoff, floored. Same-day and inverted ranges are charged as a single
//! night rather than rejected, so every valid rate yields a positive charge.
//! Totals are rounded to cents with midpoint-away-from-zero rounding.

use crate::error::PricingError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

const SECONDS_PER_DAY: i64 = 86_400;

/// Total price for a rental given as date strings.
///
/// The rate is checked before the dates. Accepts `YYYY-MM-DD`,
/// `YYYY-MM-DDTHH:MM[:SS]` and RFC 3339 timestamps.
pub fn calculate_total_price(
    price_per_day: Decimal,
    pickup_date: &str,
    dropoff_date: &str,
) -> Result<Decimal, PricingError> {
    check_rate(price_per_day)?;
    let pickup = parse_date(pickup_date)?;
    let dropoff = parse_date(dropoff_date)?;
    charge(price_per_day, nights(pickup, dropoff))
}

/// Total price for calendar dates that have already been parsed.
pub fn total_for_dates(
    price_per_day: Decimal,
    pickup_date: NaiveDate,
    dropoff_date: NaiveDate,
) -> Result<Decimal, PricingError> {
    check_rate(price_per_day)?;
    charge(price_per_day, nights_between(pickup_date, dropoff_date))
}

/// Whole nights between two instants, floored and clamped to at least one.
pub fn nights(pickup: NaiveDateTime, dropoff: NaiveDateTime) -> i64 {
    let seconds = (dropoff - pickup).num_seconds();
    seconds.div_euclid(SECONDS_PER_DAY).max(1)
}

/// Whole nights between two calendar dates, clamped to at least one.
pub fn nights_between(pickup: NaiveDate, dropoff: NaiveDate) -> i64 {
    (dropoff - pickup).num_days().max(1)
}

/// Parse a booking-form date.
///
/// Plain dates are taken as midnight. Offsets on RFC 3339 timestamps are
/// normalised to UTC so two timestamps compare on the same clock.
pub fn parse_date(s: &str) -> Result<NaiveDateTime, PricingError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(datetime);
        }
    }
    DateTime::parse_from_rfc3339(s)
        .map(|datetime| datetime.naive_utc())
        .map_err(|_| PricingError::InvalidDate(s.to_string()))
}

fn check_rate(price_per_day: Decimal) -> Result<(), PricingError> {
    if price_per_day <= Decimal::ZERO {
        return Err(PricingError::InvalidRate(price_per_day));
    }
    Ok(())
}

/// Overflowing the `Decimal` range counts as an invalid rate.
fn charge(price_per_day: Decimal, nights: i64) -> Result<Decimal, PricingError> {
    Decimal::from(nights)
        .checked_mul(price_per_day)
        .map(|total| total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or(PricingError::InvalidRate(price_per_day))
}

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn charges_each_night() {
        let total = calculate_total_price(dec!(50), "2024-01-10", "2024-01-13").unwrap();
        assert_eq!(total, dec!(150.00));
    }

    #[test]
    fn same_day_is_one_night() {
        let total = calculate_total_price(dec!(50), "2024-01-10", "2024-01-10").unwrap();
        assert_eq!(total, dec!(50.00));
    }

    #[test]
    fn inverted_range_is_one_night() {
        let total = calculate_total_price(dec!(42.5), "2024-01-13", "2024-01-10").unwrap();
        assert_eq!(total, dec!(42.50));
    }

    #[test]
    fn partial_days_are_floored() {
        let total =
            calculate_total_price(dec!(100), "2024-01-10T10:00", "2024-01-12T09:59").unwrap();
        assert_eq!(total, dec!(100.00));
        let total =
            calculate_total_price(dec!(100), "2024-01-10T10:00", "2024-01-12T10:00").unwrap();
        assert_eq!(total, dec!(200.00));
    }

    #[test]
    fn crosses_month_and_leap_day() {
        let total = calculate_total_price(dec!(10), "2024-02-27", "2024-03-02").unwrap();
        assert_eq!(total, dec!(40.00));
    }

    #[test]
    fn rfc3339_offsets_are_normalised() {
        let total = calculate_total_price(
            dec!(30),
            "2024-05-01T00:00:00+02:00",
            "2024-05-02T22:00:00Z",
        )
        .unwrap();
        // 2024-04-30T22:00Z to 2024-05-02T22:00Z
        assert_eq!(total, dec!(60.00));
    }

    #[test]
    fn rounds_to_cents() {
        let total = calculate_total_price(dec!(33.3333), "2024-01-01", "2024-01-04").unwrap();
        assert_eq!(total, dec!(100.00));
        let total = calculate_total_price(dec!(0.005), "2024-01-01", "2024-01-02").unwrap();
        assert_eq!(total, dec!(0.01));
    }

    #[test]
    fn rejects_non_positive_rate() {
        assert_eq!(
            calculate_total_price(dec!(-10), "2024-01-10", "2024-01-13"),
            Err(PricingError::InvalidRate(dec!(-10)))
        );
        assert!(matches!(
            calculate_total_price(Decimal::ZERO, "2024-01-10", "2024-01-13"),
            Err(PricingError::InvalidRate(_))
        ));
    }

    #[test]
    fn rejects_rates_that_overflow_the_total() {
        assert_eq!(
            calculate_total_price(Decimal::MAX, "2024-01-10", "2024-01-13"),
            Err(PricingError::InvalidRate(Decimal::MAX))
        );
        let huge = Decimal::from_i128_with_scale(10_i128.pow(23), 0);
        assert_eq!(
            calculate_total_price(huge, "0001-01-01", "9999-12-31"),
            Err(PricingError::InvalidRate(huge))
        );
        let first = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert!(matches!(
            total_for_dates(Decimal::MAX, first, last),
            Err(PricingError::InvalidRate(_))
        ));
    }

    #[test]
    fn widest_date_range_still_prices() {
        let first = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        let total = calculate_total_price(dec!(1), "0001-01-01", "9999-12-31").unwrap();
        assert_eq!(total, Decimal::from(nights_between(first, last)));
    }

    #[test]
    fn rejects_unparsable_dates() {
        assert_eq!(
            calculate_total_price(dec!(50), "next tuesday", "2024-01-13"),
            Err(PricingError::InvalidDate("next tuesday".to_string()))
        );
        assert!(matches!(
            calculate_total_price(dec!(50), "2024-01-10", "2024-02-30"),
            Err(PricingError::InvalidDate(_))
        ));
    }

    #[test]
    fn nights_never_below_one() {
        let base = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        for offset in -40..40 {
            let other = base + chrono::Duration::days(offset);
            let n = nights_between(base, other);
            assert!(n >= 1);
            assert_eq!(n, offset.max(1));

            let total = total_for_dates(dec!(19.99), base, other).unwrap();
            assert_eq!(total, Decimal::from(n) * dec!(19.99));
        }
    }
}
