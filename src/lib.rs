#![doc(test(attr(deny(warnings))))]

//! FinSmart core: a student finance tracker with a persisted expense ledger,
//! SIP and pocket-money planners, a dashboard projector, CSV export and a
//! rule-based chat assistant. The `finsmart_cli` binary drives it from a shell.

pub mod chart;
pub mod chat;
pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod notify;
pub mod planner;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FinSmart tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
