pub mod json_backend;
pub mod memory;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Key holding the serialized expense sequence.
pub const EXPENSES_KEY: &str = "finsmart_expenses_v1";
/// Key holding the serialized budget scalar.
pub const BUDGET_KEY: &str = "finsmart_budget";

/// Abstraction over durable key-value backends holding raw serialized values.
///
/// Implementations write synchronously: once `set` returns `Ok` the value must
/// survive a process restart.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub use json_backend::FileStore;
pub use memory::MemoryStore;
