#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use finsmart_core::{
    core::{clock::FixedClock, ledger_store::LedgerStore, LoadReport},
    errors::LedgerError,
    storage::{KeyValueStore, MemoryStore},
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Day every in-memory store under test believes is today.
pub fn today() -> NaiveDate {
    date(2025, 3, 14)
}

pub fn memory_store() -> (LedgerStore, LoadReport) {
    LedgerStore::open_with_clock(Box::new(MemoryStore::new()), Box::new(FixedClock(today())))
}

pub fn store_over(backend: impl KeyValueStore + 'static) -> (LedgerStore, LoadReport) {
    LedgerStore::open_with_clock(Box::new(backend), Box::new(FixedClock(today())))
}

/// Memory-backed store whose writes can be switched off from the test.
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn new() -> (Self, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        let store = Self {
            inner: MemoryStore::new(),
            fail_writes: Arc::clone(&flag),
        };
        (store, flag)
    }

    fn check(&self) -> Result<(), LedgerError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(LedgerError::Persistence("disk full".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), LedgerError> {
        self.check()?;
        self.inner.remove(key)
    }
}

/// Backend whose reads always fail, as an unreadable data directory would.
pub struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, LedgerError> {
        Err(LedgerError::Persistence("permission denied".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), LedgerError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), LedgerError> {
        Ok(())
    }
}
