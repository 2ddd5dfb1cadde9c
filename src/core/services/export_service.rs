//! CSV export of the expense ledger.
//!
//! Fields are joined with commas without quoting, so a category containing a
//! comma shifts the columns of its row. That limitation is kept as-is.

use std::{fs, path::Path};

use crate::config::DEFAULT_EXPORT_FILE;
use crate::errors::{LedgerError, Result};
use crate::ledger::Ledger;
use crate::storage::json_backend::{tmp_path, write_atomic};

pub const CSV_HEADER: &str = "Amount,Category,Date";

/// Delimited content plus the filename suggested to the export collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

impl ExportFile {
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let tmp = tmp_path(path);
        write_atomic(&tmp, &self.content)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

pub struct ExportService;

impl ExportService {
    pub fn to_csv(ledger: &Ledger) -> String {
        let mut rows = Vec::with_capacity(ledger.len() + 1);
        rows.push(CSV_HEADER.to_string());
        rows.extend(
            ledger
                .expenses
                .iter()
                .map(|record| format!("{},{},{}", record.amount, record.category, record.date)),
        );
        rows.join("\n")
    }

    pub fn export(ledger: &Ledger) -> Result<ExportFile> {
        Self::export_as(ledger, DEFAULT_EXPORT_FILE)
    }

    /// Fails on an empty ledger: there is nothing worth exporting.
    pub fn export_as(ledger: &Ledger, file_name: &str) -> Result<ExportFile> {
        if ledger.is_empty() {
            return Err(LedgerError::validation("no data to export"));
        }
        Ok(ExportFile {
            file_name: file_name.to_string(),
            content: Self::to_csv(ledger),
        })
    }
}
