use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{ensure_category, ensure_positive};
use crate::errors::Result;

/// A single recorded spend. Records are never edited once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    /// Validates the raw fields and builds a record with a trimmed category.
    pub fn new(amount: f64, category: &str, date: NaiveDate) -> Result<Self> {
        let amount = ensure_positive(amount, "amount")?;
        let category = ensure_category(category)?;
        Ok(Self {
            amount,
            category,
            date,
        })
    }
}
