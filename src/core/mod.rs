pub mod clock;
pub mod ledger_store;
pub mod services;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger_store::{LedgerStore, LoadReport};
