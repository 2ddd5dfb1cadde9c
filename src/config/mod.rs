use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{ensure_dir, PathResolver};
use crate::currency::{CurrencyFormat, DEFAULT_SYMBOL};
use crate::errors::LedgerError;
use crate::storage::json_backend::{tmp_path, write_atomic};

pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";
pub const DEFAULT_POCKET_DAYS: u32 = 7;
/// Short key names accepted by `config set`.
pub const SETTABLE_KEYS: &[&str] = &["currency", "export", "pocket_days", "data_dir"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_export_file")]
    pub export_file_name: String,
    #[serde(default = "default_pocket_days")]
    pub default_pocket_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: default_symbol(),
            export_file_name: default_export_file(),
            default_pocket_days: DEFAULT_POCKET_DAYS,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone())
    }

    /// Updates one setting from its textual form.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        let value = value.trim();
        match key {
            "currency_symbol" | "currency" => {
                if value.is_empty() {
                    return Err(LedgerError::validation("currency symbol must not be empty"));
                }
                self.currency_symbol = value.to_string();
            }
            "export_file_name" | "export" => {
                if value.is_empty() {
                    return Err(LedgerError::validation("export file name must not be empty"));
                }
                self.export_file_name = value.to_string();
            }
            "default_pocket_days" | "pocket_days" => {
                let days =
                    crate::ledger::validation::parse_positive_count(value, "default pocket days")?;
                if days > crate::planner::MAX_POCKET_DAYS {
                    return Err(LedgerError::validation(format!(
                        "default pocket days must be at most {}",
                        crate::planner::MAX_POCKET_DAYS
                    )));
                }
                self.default_pocket_days = days;
            }
            "data_dir" => {
                self.data_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => {
                return Err(LedgerError::Validation(format!(
                    "unknown configuration key `{other}`"
                )))
            }
        }
        Ok(())
    }
}

fn default_symbol() -> String {
    DEFAULT_SYMBOL.into()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.into()
}

fn default_pocket_days() -> u32 {
    DEFAULT_POCKET_DAYS
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        let config_root = PathResolver::config_dir_in(&base);
        ensure_dir(&config_root)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
