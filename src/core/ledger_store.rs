use chrono::NaiveDate;

use crate::core::clock::{Clock, SystemClock};
use crate::errors::{LedgerError, Result};
use crate::ledger::{CategoryTotal, ExpenseRecord, Ledger};
use crate::storage::{KeyValueStore, BUDGET_KEY, EXPENSES_KEY};

/// Notes collected while restoring persisted state.
///
/// Loading never fails: absent, unreadable or malformed values fall back to
/// an empty ledger / unset budget and are described here instead.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub warnings: Vec<String>,
    pub expenses_loaded: usize,
    pub budget_loaded: bool,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Facade that owns the ledger and writes every mutation through to storage.
pub struct LedgerStore {
    ledger: Ledger,
    storage: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
}

impl LedgerStore {
    /// Loads persisted state from `storage` using the system clock.
    pub fn open(storage: Box<dyn KeyValueStore>) -> (Self, LoadReport) {
        Self::open_with_clock(storage, Box::new(SystemClock))
    }

    pub fn open_with_clock(
        storage: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
    ) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let expenses = load_expenses(storage.as_ref(), &mut report);
        let budget = load_budget(storage.as_ref(), &mut report);
        report.expenses_loaded = expenses.len();
        report.budget_loaded = budget.is_some();

        for warning in &report.warnings {
            tracing::warn!("{warning}");
        }
        tracing::info!(
            expenses = report.expenses_loaded,
            budget = report.budget_loaded,
            "ledger loaded"
        );

        let store = Self {
            ledger: Ledger::new(expenses, budget),
            storage,
            clock,
        };
        (store, report)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    /// Appends a validated record, defaulting `date` to today, and persists the sequence.
    pub fn add_expense(
        &mut self,
        amount: f64,
        category: &str,
        date: Option<NaiveDate>,
    ) -> Result<&Ledger> {
        let date = date.unwrap_or_else(|| self.clock.today());
        let record = ExpenseRecord::new(amount, category, date)?;
        tracing::info!(amount = record.amount, category = %record.category, %date, "adding expense");
        self.ledger.push(record);
        if let Err(err) = self.persist_expenses() {
            self.ledger.expenses.pop();
            return Err(err);
        }
        Ok(&self.ledger)
    }

    /// Overwrites the budget. Zero is rejected; the budget is either positive or unset.
    pub fn set_budget(&mut self, value: f64) -> Result<&Ledger> {
        if !(value.is_finite() && value > 0.0) {
            return Err(LedgerError::validation("budget must be a positive number"));
        }
        let previous = self.ledger.budget.replace(value);
        if let Err(err) = self.persist_budget() {
            self.ledger.budget = previous;
            return Err(err);
        }
        tracing::info!(budget = value, "budget updated");
        Ok(&self.ledger)
    }

    /// Empties the expense sequence when `confirmed`; the budget is kept.
    pub fn clear(&mut self, confirmed: bool) -> Result<&Ledger> {
        if !confirmed {
            tracing::debug!("clear skipped without confirmation");
            return Ok(&self.ledger);
        }
        let previous = std::mem::take(&mut self.ledger.expenses);
        if let Err(err) = self.persist_expenses() {
            self.ledger.expenses = previous;
            return Err(err);
        }
        tracing::info!(removed = previous.len(), "ledger cleared");
        Ok(&self.ledger)
    }

    pub fn total_spent(&self) -> f64 {
        self.ledger.total_spent()
    }

    pub fn by_category(&self) -> Vec<CategoryTotal> {
        self.ledger.by_category()
    }

    pub fn top_category(&self) -> Option<CategoryTotal> {
        self.ledger.top_category()
    }

    fn persist_expenses(&self) -> Result<()> {
        let json = serde_json::to_string(&self.ledger.expenses)
            .map_err(|err| LedgerError::Persistence(err.to_string()))?;
        self.storage.set(EXPENSES_KEY, &json)
    }

    fn persist_budget(&self) -> Result<()> {
        match self.ledger.budget {
            Some(value) => {
                let json = serde_json::to_string(&value)
                    .map_err(|err| LedgerError::Persistence(err.to_string()))?;
                self.storage.set(BUDGET_KEY, &json)
            }
            None => self.storage.remove(BUDGET_KEY),
        }
    }
}

fn load_expenses(storage: &dyn KeyValueStore, report: &mut LoadReport) -> Vec<ExpenseRecord> {
    let raw = match storage.get(EXPENSES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            report
                .warnings
                .push(format!("expenses unavailable, starting empty: {err}"));
            return Vec::new();
        }
    };
    let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            report
                .warnings
                .push(LedgerError::Parse(format!("stored expenses ignored: {err}")).to_string());
            return Vec::new();
        }
    };
    let total = entries.len();
    let valid: Vec<ExpenseRecord> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<ExpenseRecord>(entry).ok())
        .filter_map(|record| ExpenseRecord::new(record.amount, &record.category, record.date).ok())
        .collect();
    if valid.len() != total {
        report.warnings.push(format!(
            "skipped {} stored expense(s) with an invalid amount, category or date",
            total - valid.len()
        ));
    }
    valid
}

fn load_budget(storage: &dyn KeyValueStore, report: &mut LoadReport) -> Option<f64> {
    let raw = match storage.get(BUDGET_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            report
                .warnings
                .push(format!("budget unavailable, treating as unset: {err}"));
            return None;
        }
    };
    let parsed = serde_json::from_str::<f64>(&raw)
        .ok()
        .or_else(|| raw.trim().trim_matches('"').parse::<f64>().ok());
    match parsed {
        Some(value) if value.is_finite() && value > 0.0 => Some(value),
        Some(_) => None,
        None => {
            report.warnings.push(
                LedgerError::Parse(format!("stored budget `{}` ignored", raw.trim())).to_string(),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::storage::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn empty_store() -> LedgerStore {
        LedgerStore::open_with_clock(Box::new(MemoryStore::new()), Box::new(FixedClock(today()))).0
    }

    #[test]
    fn add_expense_defaults_date_to_today() {
        let mut store = empty_store();
        store.add_expense(25.0, "food", None).unwrap();
        assert_eq!(store.ledger().expenses[0].date, today());
    }

    #[test]
    fn add_expense_persists_whole_sequence() {
        let mut store = empty_store();
        store.add_expense(25.0, "food", None).unwrap();
        store.add_expense(5.0, "bus", None).unwrap();
        let raw = store.storage().get(EXPENSES_KEY).unwrap().unwrap();
        let stored: Vec<ExpenseRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, store.ledger().expenses);
    }

    #[test]
    fn failed_validation_leaves_ledger_unchanged() {
        let mut store = empty_store();
        store.add_expense(25.0, "food", None).unwrap();
        let err = store.add_expense(-1.0, "food", None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.ledger().len(), 1);
    }

    #[test]
    fn set_budget_rejects_zero() {
        let mut store = empty_store();
        assert!(store.set_budget(0.0).is_err());
        assert!(store.ledger().budget.is_none());
        store.set_budget(300.0).unwrap();
        assert_eq!(store.ledger().budget, Some(300.0));
        assert_eq!(
            store.storage().get(BUDGET_KEY).unwrap().as_deref(),
            Some("300.0")
        );
    }

    #[test]
    fn unconfirmed_clear_is_a_no_op() {
        let mut store = empty_store();
        store.add_expense(25.0, "food", None).unwrap();
        store.clear(false).unwrap();
        assert_eq!(store.ledger().len(), 1);
    }

    #[test]
    fn budget_string_from_legacy_writer_is_accepted() {
        let storage = MemoryStore::with_values([(BUDGET_KEY, "450")]);
        let (store, report) = LedgerStore::open(Box::new(storage));
        assert_eq!(store.ledger().budget, Some(450.0));
        assert!(report.is_clean());
    }

    #[test]
    fn zero_budget_on_disk_means_unset() {
        let storage = MemoryStore::with_values([(BUDGET_KEY, "0")]);
        let (store, report) = LedgerStore::open(Box::new(storage));
        assert!(store.ledger().budget.is_none());
        assert!(report.is_clean());
    }
}
