use serde::{Deserialize, Serialize};

pub const DEFAULT_SYMBOL: &str = "₹";

/// Single-currency display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL)
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Two-decimal amount with the symbol prefix, sign first: `-₹5.00`.
    pub fn amount(&self, value: f64) -> String {
        if value < 0.0 {
            format!("-{}{:.2}", self.symbol, value.abs())
        } else {
            format!("{}{:.2}", self.symbol, value)
        }
    }

    /// Symbol plus the shortest natural rendering (`₹500`, `₹12.5`).
    pub fn plain(&self, value: f64) -> String {
        format!("{}{}", self.symbol, value)
    }
}
