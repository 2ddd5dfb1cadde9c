//! Parse-then-validate helpers shared by the store, planner and shell.
//!
//! Raw text never flows into arithmetic directly: it is parsed into a typed
//! value and rejected with [`LedgerError::Validation`] when it is missing,
//! non-numeric, non-finite or not strictly positive.

use chrono::NaiveDate;

use crate::errors::{LedgerError, Result};

/// Accepts strictly positive, finite numbers.
pub fn ensure_positive(value: f64, field: &str) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LedgerError::Validation(format!(
            "{field} must be a positive number"
        )))
    }
}

/// Returns the trimmed category or fails when nothing is left.
pub fn ensure_category(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::validation("category must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Parses a positive decimal such as `120`, `12.50` or `12%`.
///
/// A single trailing `%` is tolerated so rates can be typed the way people
/// write them.
pub fn parse_positive(raw: &str, field: &str) -> Result<f64> {
    let cleaned = raw.trim();
    let cleaned = cleaned.strip_suffix('%').unwrap_or(cleaned).trim();
    if cleaned.is_empty() {
        return Err(LedgerError::Validation(format!("{field} is required")));
    }
    let value: f64 = cleaned
        .parse()
        .map_err(|_| LedgerError::Validation(format!("{field} must be a number, got `{raw}`")))?;
    ensure_positive(value, field)
}

/// Parses a positive whole number (day counts).
pub fn parse_positive_count(raw: &str, field: &str) -> Result<u32> {
    let cleaned = raw.trim();
    let value: u32 = cleaned.parse().map_err(|_| {
        LedgerError::Validation(format!("{field} must be a positive whole number"))
    })?;
    if value == 0 {
        return Err(LedgerError::Validation(format!(
            "{field} must be a positive whole number"
        )));
    }
    Ok(value)
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::Validation(format!("date must be YYYY-MM-DD, got `{raw}`")))
}
