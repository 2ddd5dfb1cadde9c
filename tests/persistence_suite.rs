mod common;

use std::fs;

use common::date;
use finsmart_core::{
    core::{clock::FixedClock, ledger_store::LedgerStore},
    errors::LedgerError,
    storage::{FileStore, KeyValueStore, BUDGET_KEY, EXPENSES_KEY},
};
use tempfile::tempdir;

fn open(store: FileStore) -> LedgerStore {
    LedgerStore::open_with_clock(Box::new(store), Box::new(FixedClock(date(2025, 3, 14)))).0
}

#[test]
fn file_store_survives_restart() {
    let temp = tempdir().unwrap();
    {
        let mut store = open(FileStore::new(Some(temp.path().to_path_buf())).unwrap());
        store.add_expense(99.5, "books", None).unwrap();
        store.set_budget(1500.0).unwrap();
    }

    let backend = FileStore::new(Some(temp.path().to_path_buf())).unwrap();
    assert!(backend.value_path(EXPENSES_KEY).exists());
    let (store, report) =
        LedgerStore::open_with_clock(Box::new(backend), Box::new(FixedClock(date(2025, 3, 15))));
    assert!(report.is_clean());
    assert_eq!(store.ledger().total_spent(), 99.5);
    assert_eq!(store.ledger().budget, Some(1500.0));
    assert_eq!(store.ledger().expenses[0].date, date(2025, 3, 14));
}

#[test]
fn malformed_expenses_load_as_empty_with_warning() {
    let temp = tempdir().unwrap();
    let backend = FileStore::new(Some(temp.path().to_path_buf())).unwrap();
    fs::write(backend.value_path(EXPENSES_KEY), "{not json").unwrap();
    fs::write(backend.value_path(BUDGET_KEY), "\"750\"").unwrap();

    let (store, report) =
        LedgerStore::open_with_clock(Box::new(backend), Box::new(FixedClock(date(2025, 1, 1))));
    assert!(store.ledger().is_empty());
    assert_eq!(store.ledger().budget, Some(750.0));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("Parse error"));
}

#[test]
fn bare_and_zero_budgets_on_disk() {
    let temp = tempdir().unwrap();
    let backend = FileStore::new(Some(temp.path().to_path_buf())).unwrap();
    backend.set(BUDGET_KEY, "0").unwrap();
    let (store, report) = LedgerStore::open(Box::new(backend.clone()));
    assert_eq!(store.ledger().budget, None);
    assert!(report.is_clean());

    backend.set(BUDGET_KEY, "lots").unwrap();
    let (store, report) = LedgerStore::open(Box::new(backend));
    assert_eq!(store.ledger().budget, None);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn invalid_records_are_skipped_on_load() {
    let temp = tempdir().unwrap();
    let backend = FileStore::new(Some(temp.path().to_path_buf())).unwrap();
    backend
        .set(
            EXPENSES_KEY,
            r#"[{"amount":12.0,"category":"food","date":"2025-02-01"},
                {"amount":-4.0,"category":"food","date":"2025-02-01"},
                {"amount":3.0,"category":"  ","date":"2025-02-02"}]"#,
        )
        .unwrap();
    let (store, report) = LedgerStore::open(Box::new(backend));
    assert_eq!(store.ledger().len(), 1);
    assert_eq!(report.expenses_loaded, 1);
    assert!(report.warnings[0].contains("skipped 2"));
}

#[test]
fn bad_dates_drop_only_their_own_record() {
    let temp = tempdir().unwrap();
    let backend = FileStore::new(Some(temp.path().to_path_buf())).unwrap();
    backend
        .set(
            EXPENSES_KEY,
            r#"[{"amount":12.0,"category":"food","date":"2025-02-01"},
                {"amount":4.0,"category":"food","date":"2025-02-30"},
                {"amount":6.0,"category":"bus"},
                {"amount":3.0,"category":"fees","date":"2025-02-02"}]"#,
        )
        .unwrap();
    let (store, report) = LedgerStore::open(Box::new(backend));
    let categories: Vec<_> = store
        .ledger()
        .expenses
        .iter()
        .map(|e| e.category.as_str())
        .collect();
    assert_eq!(categories, vec!["food", "fees"]);
    assert_eq!(report.expenses_loaded, 2);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("skipped 2"));
}

#[test]
fn many_records_reload_in_insertion_order() {
    let temp = tempdir().unwrap();
    let entries = [
        (12.0, "food", date(2025, 3, 1)),
        (250.0, "rent", date(2025, 2, 27)),
        (3.5, "tea", date(2025, 3, 2)),
        (40.0, "books", date(2025, 1, 15)),
    ];
    {
        let mut store = open(FileStore::new(Some(temp.path().to_path_buf())).unwrap());
        for (amount, category, day) in entries {
            store.add_expense(amount, category, Some(day)).unwrap();
        }
    }

    let (store, report) = LedgerStore::open(Box::new(
        FileStore::new(Some(temp.path().to_path_buf())).unwrap(),
    ));
    assert!(report.is_clean());
    let reloaded: Vec<_> = store
        .ledger()
        .expenses
        .iter()
        .map(|e| (e.amount, e.category.as_str(), e.date))
        .collect();
    assert_eq!(reloaded, entries.to_vec());
}

#[test]
fn blocked_temp_file_fails_write_and_keeps_state() {
    let temp = tempdir().unwrap();
    let backend = FileStore::new(Some(temp.path().to_path_buf())).unwrap();
    let path = backend.value_path(EXPENSES_KEY);
    let mut store = open(backend);
    store.add_expense(10.0, "food", None).unwrap();
    let original = fs::read_to_string(&path).unwrap();

    // A directory where the temp file should go makes File::create fail.
    let mut tmp = path.clone();
    tmp.set_extension("json.tmp");
    fs::create_dir_all(&tmp).unwrap();

    let err = store.add_expense(20.0, "travel", None).unwrap_err();
    assert!(matches!(err, LedgerError::Persistence(_)));
    assert_eq!(store.ledger().len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
