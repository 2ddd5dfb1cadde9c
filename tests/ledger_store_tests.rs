mod common;

use std::sync::atomic::Ordering;

use common::{date, memory_store, store_over, today, FlakyStore, UnreadableStore};
use finsmart_core::errors::LedgerError;
use finsmart_core::ledger::{CategoryTotal, ExpenseRecord, Ledger};
use finsmart_core::storage::{KeyValueStore, MemoryStore, BUDGET_KEY, EXPENSES_KEY};

#[test]
fn totals_follow_every_append() {
    let (mut store, report) = memory_store();
    assert!(report.is_clean());

    let mut expected = 0.0;
    for (amount, category) in [(10.0, "food"), (5.5, "bus"), (120.0, "books")] {
        store.add_expense(amount, category, None).expect("add");
        expected += amount;
        assert_eq!(store.total_spent(), expected);
    }
    assert_eq!(store.ledger().len(), 3);
    assert!(store.ledger().expenses.iter().all(|e| e.date == today()));
}

#[test]
fn top_category_sums_by_category() {
    let (mut store, _) = memory_store();
    store.add_expense(10.0, "food", None).unwrap();
    store.add_expense(5.0, "food", None).unwrap();
    store.add_expense(20.0, "travel", None).unwrap();

    assert_eq!(
        store.top_category(),
        Some(CategoryTotal {
            category: "travel".into(),
            amount: 20.0
        })
    );
    let categories: Vec<_> = store
        .by_category()
        .into_iter()
        .map(|total| total.category)
        .collect();
    assert_eq!(categories, vec!["food", "travel"]);
}

#[test]
fn rejected_input_leaves_ledger_untouched() {
    let (mut store, _) = memory_store();
    store.add_expense(40.0, "rent", None).unwrap();
    let before = store.ledger().clone();

    for (amount, category) in [(0.0, "food"), (-3.0, "food"), (f64::NAN, "food"), (5.0, "   ")] {
        let err = store.add_expense(amount, category, None).unwrap_err();
        assert!(err.is_validation(), "{amount} {category:?}: {err}");
    }
    assert!(store.set_budget(0.0).unwrap_err().is_validation());
    assert!(store.set_budget(-10.0).unwrap_err().is_validation());
    assert_eq!(store.ledger(), &before);
}

#[test]
fn categories_are_trimmed_and_dates_kept() {
    let (mut store, _) = memory_store();
    store
        .add_expense(12.0, "  snacks ", Some(date(2024, 12, 31)))
        .unwrap();
    let record = &store.ledger().expenses[0];
    assert_eq!(record.category, "snacks");
    assert_eq!(record.date, date(2024, 12, 31));
}

#[test]
fn clear_keeps_budget_and_requires_confirmation() {
    let (mut store, _) = memory_store();
    store.add_expense(10.0, "food", None).unwrap();
    store.set_budget(500.0).unwrap();

    store.clear(false).unwrap();
    assert_eq!(store.ledger().len(), 1);

    store.clear(true).unwrap();
    assert!(store.ledger().is_empty());
    assert_eq!(store.total_spent(), 0.0);
    assert_eq!(store.ledger().budget, Some(500.0));
    assert_eq!(
        store.storage().get(EXPENSES_KEY).unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn mutations_write_through_and_reload() {
    let backend = MemoryStore::new();
    let (mut store, _) = store_over(backend);
    store.add_expense(25.0, "movies", Some(date(2025, 1, 2))).unwrap();
    store.set_budget(300.0).unwrap();

    let expenses = store.storage().get(EXPENSES_KEY).unwrap().expect("expenses key");
    let budget = store.storage().get(BUDGET_KEY).unwrap().expect("budget key");
    assert_eq!(
        expenses,
        r#"[{"amount":25.0,"category":"movies","date":"2025-01-02"}]"#
    );

    let reopened = MemoryStore::with_values([(EXPENSES_KEY, expenses), (BUDGET_KEY, budget)]);
    let (store, report) = store_over(reopened);
    assert!(report.is_clean());
    assert_eq!(report.expenses_loaded, 1);
    assert!(report.budget_loaded);
    assert_eq!(store.ledger().budget, Some(300.0));
    assert_eq!(store.ledger().expenses[0].category, "movies");
}

#[test]
fn failed_write_rolls_back_every_mutation() {
    let (backend, fail_writes) = FlakyStore::new();
    let (mut store, _) = store_over(backend);
    store.add_expense(10.0, "food", None).unwrap();
    store.set_budget(100.0).unwrap();
    let before = store.ledger().clone();

    fail_writes.store(true, Ordering::SeqCst);

    let err = store.add_expense(5.0, "tea", None).unwrap_err();
    assert!(matches!(err, LedgerError::Persistence(_)));
    assert_eq!(store.ledger(), &before);

    assert!(matches!(
        store.set_budget(250.0),
        Err(LedgerError::Persistence(_))
    ));
    assert_eq!(store.ledger(), &before);

    assert!(matches!(store.clear(true), Err(LedgerError::Persistence(_))));
    assert_eq!(store.ledger(), &before);

    fail_writes.store(false, Ordering::SeqCst);
    store.add_expense(5.0, "tea", None).unwrap();
    assert_eq!(store.ledger().len(), 2);
}

#[test]
fn read_failures_are_reported_as_warnings() {
    let (store, report) = store_over(UnreadableStore);
    assert!(store.ledger().is_empty());
    assert_eq!(store.ledger().budget, None);
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].contains("permission denied"));
}

#[test]
fn latest_first_reverses_insertion_order() {
    let (mut store, _) = memory_store();
    store.add_expense(1.0, "a", None).unwrap();
    store.add_expense(2.0, "b", None).unwrap();
    let order: Vec<_> = store
        .ledger()
        .expenses_latest_first()
        .map(|e| e.category.as_str())
        .collect();
    assert_eq!(order, vec!["b", "a"]);
}

#[test]
fn total_ignores_record_order() {
    let records: Vec<ExpenseRecord> = [(0.1, "a"), (0.2, "b"), (0.3, "c"), (1e6, "d"), (7.25, "a")]
        .iter()
        .map(|(amount, category)| ExpenseRecord::new(*amount, category, today()).unwrap())
        .collect();
    let forward = Ledger::new(records.clone(), None).total_spent();
    let mut reversed = records.clone();
    reversed.reverse();
    let mut rotated = records;
    rotated.rotate_left(2);

    for other in [reversed, rotated] {
        let total = Ledger::new(other, None).total_spent();
        assert!((total - forward).abs() < 1e-6, "{total} vs {forward}");
    }
}

#[test]
fn add_after_clear_starts_a_fresh_sequence() {
    let (mut store, _) = memory_store();
    for amount in [10.0, 20.0, 30.0] {
        store.add_expense(amount, "food", None).unwrap();
    }
    store.clear(true).unwrap();
    store.add_expense(7.0, "bus", None).unwrap();

    assert_eq!(store.ledger().len(), 1);
    assert_eq!(store.total_spent(), 7.0);
    let raw = store.storage().get(EXPENSES_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"[{"amount":7.0,"category":"bus","date":"2025-03-14"}]"#);
}
