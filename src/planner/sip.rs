//! Systematic investment plan projections.
//!
//! Contributions are made at the start of each month and compound monthly,
//! so the closed form is the annuity-due future value
//! `P * ((1 + r)^n - 1) / r * (1 + r)`.

use crate::chart::ChartSeries;
use crate::errors::{LedgerError, Result};
use crate::ledger::validation::ensure_positive;

/// Longest supported plan: 100 years of monthly contributions.
pub const MAX_SIP_MONTHS: u32 = 1200;

/// One month of accumulated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SipPoint {
    pub period: u32,
    pub value: f64,
}

/// Month-by-month accumulation plus the closed-form future value.
#[derive(Debug, Clone, PartialEq)]
pub struct SipProjection {
    pub monthly_amount: f64,
    pub months: u32,
    pub monthly_rate: f64,
    pub points: Vec<SipPoint>,
    pub future_value: f64,
}

impl SipProjection {
    /// Chart feed with `M1..Mn` labels and values rounded to two decimals.
    pub fn chart_series(&self) -> ChartSeries {
        let (labels, values) = self
            .points
            .iter()
            .map(|point| (format!("M{}", point.period), round_cents(point.value)))
            .unzip();
        ChartSeries { labels, values }
    }
}

/// Converts a duration in years to whole months, rounding half away from zero.
pub fn months_for_years(years: f64) -> u32 {
    (years * 12.0).round().max(0.0) as u32
}

/// Converts an annual percentage rate to the monthly fraction.
pub fn monthly_rate_for(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Validated future value of a monthly SIP.
pub fn sip_future_value(monthly_amount: f64, years: f64, annual_rate_percent: f64) -> Result<f64> {
    let monthly_amount = ensure_positive(monthly_amount, "monthly amount")?;
    let years = ensure_positive(years, "years")?;
    let annual_rate_percent = ensure_positive(annual_rate_percent, "annual rate")?;
    let months = checked_months(years)?;
    Ok(annuity_due_value(
        monthly_amount,
        months,
        monthly_rate_for(annual_rate_percent),
    ))
}

fn checked_months(years: f64) -> Result<u32> {
    let months = months_for_years(years);
    if months > MAX_SIP_MONTHS {
        return Err(LedgerError::validation(format!(
            "duration must be at most {} years",
            MAX_SIP_MONTHS / 12
        )));
    }
    Ok(months)
}

/// Closed-form annuity-due value. A zero rate degrades to plain accumulation.
pub fn annuity_due_value(monthly_amount: f64, months: u32, monthly_rate: f64) -> f64 {
    if monthly_rate == 0.0 {
        return monthly_amount * f64::from(months);
    }
    let growth = (1.0 + monthly_rate).powf(f64::from(months));
    monthly_amount * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate)
}

/// Iterative accumulation: `acc = acc * (1 + r) + P`, one value per month.
pub fn sip_series(monthly_amount: f64, months: u32, monthly_rate: f64) -> Vec<f64> {
    let mut acc = 0.0;
    (1..=months)
        .map(|_| {
            acc = acc * (1.0 + monthly_rate) + monthly_amount;
            acc
        })
        .collect()
}

/// Builds the full projection used by the planner views.
pub fn project_sip(
    monthly_amount: f64,
    years: f64,
    annual_rate_percent: f64,
) -> Result<SipProjection> {
    let future_value = sip_future_value(monthly_amount, years, annual_rate_percent)?;
    let months = checked_months(years)?;
    let monthly_rate = monthly_rate_for(annual_rate_percent);
    let points = sip_series(monthly_amount, months, monthly_rate)
        .into_iter()
        .zip(1..)
        .map(|(value, period)| SipPoint { period, value })
        .collect();
    tracing::debug!(monthly_amount, months, monthly_rate, future_value, "sip projected");
    Ok(SipProjection {
        monthly_amount,
        months,
        monthly_rate,
        points,
        future_value,
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_year_at_twelve_percent() {
        let fv = sip_future_value(1000.0, 1.0, 12.0).unwrap();
        let expected = 1000.0 * ((1.01_f64.powi(12) - 1.0) / 0.01) * 1.01;
        assert!((fv - expected).abs() < 1e-9);
        assert!((fv - 12_809.33).abs() < 0.01, "got {fv}");
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(sip_future_value(0.0, 1.0, 12.0).is_err());
        assert!(sip_future_value(100.0, -1.0, 12.0).is_err());
        assert!(sip_future_value(100.0, 1.0, 0.0).is_err());
        assert!(sip_future_value(f64::INFINITY, 1.0, 12.0).is_err());
    }

    #[test]
    fn durations_beyond_a_century_are_rejected() {
        assert!(sip_future_value(500.0, 100.0, 12.0).unwrap() > 0.0);
        let err = sip_future_value(500.0, 2e8, 12.0).unwrap_err();
        assert!(err.is_validation());
        assert!(project_sip(100.0, 1e9, 12.0).unwrap_err().is_validation());
    }

    #[test]
    fn large_month_counts_keep_growing() {
        let short = annuity_due_value(1.0, 600, 0.001);
        let long = annuity_due_value(1.0, u32::MAX, 1e-12);
        assert!(short > 600.0);
        assert!(long > 0.0);
    }

    #[test]
    fn zero_rate_falls_back_to_accumulation() {
        assert_eq!(annuity_due_value(250.0, 12, 0.0), 3000.0);
    }

    #[test]
    fn series_accumulates_end_of_month_values() {
        let series = sip_series(100.0, 3, 0.01);
        assert_eq!(series.len(), 3);
        assert!((series[0] - 100.0).abs() < 1e-9);
        assert!((series[1] - 201.0).abs() < 1e-9);
        assert!((series[2] - 303.01).abs() < 1e-9);
    }

    #[test]
    fn final_series_value_times_growth_matches_closed_form() {
        let series = sip_series(500.0, 60, 0.01);
        let fv = annuity_due_value(500.0, 60, 0.01);
        assert!((series[59] * 1.01 - fv).abs() < 1e-6);
    }

    #[test]
    fn fractional_years_round_to_whole_months() {
        assert_eq!(months_for_years(1.5), 18);
        assert_eq!(months_for_years(0.04), 0);
        assert_eq!(months_for_years(2.0 / 12.0 + 0.01), 2);
    }

    #[test]
    fn chart_series_labels_each_month() {
        let projection = project_sip(1000.0, 0.25, 12.0).unwrap();
        let chart = projection.chart_series();
        assert_eq!(chart.labels, vec!["M1", "M2", "M3"]);
        assert_eq!(chart.values, vec![1000.0, 2010.0, 3030.1]);
    }
}
