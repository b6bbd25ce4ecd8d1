//! Pricing engine for reservations.
//!
//! Pure functions with no database access: the reservations service
//! resolves daily rates (snapshot or catalog) and calls [`compute_amounts`]
//! on every create and on every update that touches the date range or the
//! selected resources.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Inputs for one pricing computation.
///
/// `vehicle_rate` / `bungalow_rate` are the per-day rates of the attached
/// resources; `None` means the resource is not part of the reservation.
#[derive(Debug, Clone)]
pub struct PricingInputs {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub vehicle_rate: Option<Decimal>,
    pub bungalow_rate: Option<Decimal>,
    /// Tax percentage applied to the subtotal (0-100)
    pub tax_rate: Decimal,
    /// Commission percentage, tracked but never billed to the client
    pub commission_rate: Decimal,
}

/// Billable amounts derived from a reservation's inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedAmounts {
    pub days: i64,
    /// Blended nightly rate when several resources are combined
    pub rate_per_night: Decimal,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub commission_amount: Decimal,
    pub total_amount: Decimal,
}

/// Percentage rates must stay within 0-100.
fn validate_rate(value: Decimal, field: &str) -> AppResult<()> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err(AppError::Validation(format!(
            "{field} must be between 0 and 100"
        )));
    }
    Ok(())
}

/// Number of billable days: `ceil((end - start) / 1 day)`.
///
/// A span that is not strictly positive is invalid input, never a one-day
/// charge; the caller must reject the reservation.
pub fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<i64> {
    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return Err(AppError::Validation(
            "End date must be strictly after start date".to_string(),
        ));
    }
    Ok((seconds + 86_399) / 86_400)
}

/// Compute billable amounts for a reservation.
///
/// Subtotal is the sum of `rate * days` over the attached resources (a
/// vehicle and a bungalow both contribute when combined). Tax is applied
/// to the subtotal; commission is computed from the same subtotal but is
/// excluded from the client-facing total, its direction carried by the
/// reservation's `commission_type`.
pub fn compute_amounts(inputs: &PricingInputs) -> AppResult<ComputedAmounts> {
    let days = rental_days(inputs.start_date, inputs.end_date)?;
    validate_rate(inputs.tax_rate, "Tax rate")?;
    validate_rate(inputs.commission_rate, "Commission rate")?;

    if inputs.vehicle_rate.is_none() && inputs.bungalow_rate.is_none() {
        return Err(AppError::Validation(
            "At least one vehicle or bungalow must be selected".to_string(),
        ));
    }

    let days_dec = Decimal::from(days);
    let mut subtotal = Decimal::ZERO;
    if let Some(rate) = inputs.vehicle_rate {
        subtotal += rate * days_dec;
    }
    if let Some(rate) = inputs.bungalow_rate {
        subtotal += rate * days_dec;
    }

    let hundred = Decimal::from(100);
    let tax_amount = subtotal * inputs.tax_rate / hundred;
    let commission_amount = subtotal * inputs.commission_rate / hundred;

    Ok(ComputedAmounts {
        days,
        rate_per_night: subtotal / days_dec,
        subtotal,
        tax_amount,
        commission_amount,
        total_amount: subtotal + tax_amount,
    })
}

/// Aggregate totals for a document composed from several reservations.
///
/// Tax is recomputed once over the aggregated subtotal so consolidating
/// N reservations yields a single coherent figure rather than N
/// independent roundings.
pub fn aggregate_totals(
    subtotals: &[Decimal],
    tax_rate: Decimal,
) -> AppResult<(Decimal, Decimal, Decimal)> {
    validate_rate(tax_rate, "Tax rate")?;
    let subtotal: Decimal = subtotals.iter().sum();
    let tax_amount = subtotal * tax_rate / Decimal::from(100);
    Ok((subtotal, tax_amount, subtotal + tax_amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn inputs(start: DateTime<Utc>, end: DateTime<Utc>) -> PricingInputs {
        PricingInputs {
            start_date: start,
            end_date: end,
            vehicle_rate: None,
            bungalow_rate: None,
            tax_rate: Decimal::ZERO,
            commission_rate: Decimal::ZERO,
        }
    }

    #[test]
    fn vehicle_rental_with_tax() {
        // 15000/day vehicle, 3 days, 10% tax
        let mut i = inputs(date(2025, 1, 10), date(2025, 1, 13));
        i.vehicle_rate = Some(dec!(15000));
        i.tax_rate = dec!(10);

        let amounts = compute_amounts(&i).unwrap();
        assert_eq!(amounts.days, 3);
        assert_eq!(amounts.subtotal, dec!(45000));
        assert_eq!(amounts.tax_amount, dec!(4500));
        assert_eq!(amounts.total_amount, dec!(49500));
        assert_eq!(amounts.rate_per_night, dec!(15000));
    }

    #[test]
    fn combined_vehicle_and_bungalow() {
        let mut i = inputs(date(2025, 3, 1), date(2025, 3, 3));
        i.vehicle_rate = Some(dec!(12000));
        i.bungalow_rate = Some(dec!(20000));

        let amounts = compute_amounts(&i).unwrap();
        assert_eq!(amounts.days, 2);
        assert_eq!(amounts.subtotal, dec!(64000));
        assert_eq!(amounts.rate_per_night, dec!(32000));
    }

    #[test]
    fn total_always_excludes_commission() {
        let mut i = inputs(date(2025, 6, 1), date(2025, 6, 5));
        i.bungalow_rate = Some(dec!(18000));
        i.tax_rate = dec!(5);
        i.commission_rate = dec!(15);

        let amounts = compute_amounts(&i).unwrap();
        assert_eq!(amounts.commission_amount, dec!(10800));
        assert_eq!(amounts.total_amount, amounts.subtotal + amounts.tax_amount);
    }

    #[test]
    fn partial_day_rounds_up() {
        let start = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 2, 2, 14, 0, 0).unwrap();
        assert_eq!(rental_days(start, end).unwrap(), 2);
    }

    #[test]
    fn equal_dates_rejected() {
        let d = date(2025, 4, 10);
        assert!(matches!(rental_days(d, d), Err(AppError::Validation(_))));

        let mut i = inputs(d, d);
        i.vehicle_rate = Some(dec!(9000));
        assert!(compute_amounts(&i).is_err());
    }

    #[test]
    fn inverted_dates_rejected() {
        let i = inputs(date(2025, 4, 10), date(2025, 4, 8));
        assert!(matches!(compute_amounts(&i), Err(AppError::Validation(_))));
    }

    #[test]
    fn no_resource_rejected() {
        let i = inputs(date(2025, 4, 10), date(2025, 4, 12));
        assert!(matches!(compute_amounts(&i), Err(AppError::Validation(_))));
    }

    #[test]
    fn aggregate_taxes_once() {
        let (subtotal, tax, total) =
            aggregate_totals(&[dec!(45000), dec!(30000)], dec!(13)).unwrap();
        assert_eq!(subtotal, dec!(75000));
        assert_eq!(tax, dec!(9750));
        assert_eq!(total, dec!(84750));
    }

    #[test]
    fn out_of_range_rates_rejected() {
        let mut i = inputs(date(2025, 1, 10), date(2025, 1, 13));
        i.vehicle_rate = Some(dec!(15000));

        i.tax_rate = dec!(-50);
        assert!(matches!(compute_amounts(&i), Err(AppError::Validation(_))));

        i.tax_rate = dec!(10);
        i.commission_rate = dec!(250);
        assert!(matches!(compute_amounts(&i), Err(AppError::Validation(_))));

        i.commission_rate = dec!(100);
        assert!(compute_amounts(&i).is_ok());

        assert!(matches!(
            aggregate_totals(&[dec!(45000)], dec!(101)),
            Err(AppError::Validation(_))
        ));
    }
}
