use crate::errors::{LedgerError, Result};
use crate::ledger::validation::ensure_positive;

/// Longest plan the schedule is built for.
pub const MAX_POCKET_DAYS: u32 = 366;

/// Even split of a fixed sum across a number of days.
#[derive(Debug, Clone, PartialEq)]
pub struct PocketPlan {
    pub total_amount: f64,
    pub per_day: f64,
    pub total_days: u32,
    pub schedule: Vec<f64>,
}

impl PocketPlan {
    /// `(day number, allowance)` pairs starting at day 1.
    pub fn days(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (1..).zip(self.schedule.iter().copied())
    }
}

pub fn pocket_plan(total_amount: f64, days: u32) -> Result<PocketPlan> {
    let total_amount = ensure_positive(total_amount, "pocket amount")?;
    if days == 0 {
        return Err(LedgerError::validation(
            "days must be a positive whole number",
        ));
    }
    if days > MAX_POCKET_DAYS {
        return Err(LedgerError::validation(format!(
            "days must be at most {MAX_POCKET_DAYS}"
        )));
    }
    let per_day = total_amount / f64::from(days);
    Ok(PocketPlan {
        total_amount,
        per_day,
        total_days: days,
        schedule: vec![per_day; days as usize],
    })
}
