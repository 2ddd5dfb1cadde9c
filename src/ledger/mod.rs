//! Ledger domain models, persistence-friendly types, and helpers.

pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod validation;

pub use expense::ExpenseRecord;
pub use ledger::{CategoryTotal, Ledger};
