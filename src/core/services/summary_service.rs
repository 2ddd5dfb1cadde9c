use crate::chart::ChartSeries;
use crate::currency::CurrencyFormat;
use crate::ledger::{CategoryTotal, Ledger};
use crate::notify::{deliver, Notification, Notifier};

pub const BUDGET_ALERT_TITLE: &str = "Budget exceeded";

/// Display-ready aggregates derived from the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub entry_count: usize,
    pub total_spent: f64,
    pub budget: Option<f64>,
    pub saved_amount: f64,
    pub budget_exceeded: bool,
    pub top_category: Option<CategoryTotal>,
    pub alert: Option<Notification>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn project(ledger: &Ledger) -> DashboardSummary {
        Self::project_with(ledger, &CurrencyFormat::default())
    }

    /// Pure projection; the alert body uses `currency` for amounts.
    pub fn project_with(ledger: &Ledger, currency: &CurrencyFormat) -> DashboardSummary {
        let total_spent = ledger.total_spent();
        let saved_amount = ledger
            .budget
            .map(|budget| (budget - total_spent).max(0.0))
            .unwrap_or(0.0);
        let budget_exceeded = ledger.budget.is_some_and(|budget| total_spent > budget);
        let alert = match ledger.budget {
            Some(budget) if budget_exceeded => Some(Notification::new(
                BUDGET_ALERT_TITLE,
                format!(
                    "You spent {} > budget {}",
                    currency.amount(total_spent),
                    currency.plain(budget)
                ),
            )),
            _ => None,
        };
        DashboardSummary {
            entry_count: ledger.len(),
            total_spent,
            budget: ledger.budget,
            saved_amount,
            budget_exceeded,
            top_category: ledger.top_category(),
            alert,
        }
    }

    /// Projects and hands any budget alert to `notifier`. Every call re-emits.
    pub fn refresh(
        ledger: &Ledger,
        currency: &CurrencyFormat,
        notifier: &mut dyn Notifier,
    ) -> DashboardSummary {
        let summary = Self::project_with(ledger, currency);
        if let Some(alert) = summary.alert.as_ref() {
            tracing::info!(
                spent = summary.total_spent,
                budget = summary.budget,
                "budget exceeded"
            );
            deliver(notifier, alert);
        }
        summary
    }

    /// Category breakdown for the doughnut chart; a single placeholder slice when empty.
    pub fn expense_breakdown(ledger: &Ledger) -> ChartSeries {
        let totals = ledger.by_category();
        if totals.is_empty() {
            return ChartSeries {
                labels: vec!["No Data".into()],
                values: vec![1.0],
            };
        }
        let (labels, values) = totals
            .into_iter()
            .map(|total| (total.category, total.amount))
            .unzip();
        ChartSeries { labels, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseRecord;
    use chrono::NaiveDate;

    fn ledger(amounts: &[(f64, &str)], budget: Option<f64>) -> Ledger {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let expenses = amounts
            .iter()
            .map(|(amount, category)| ExpenseRecord::new(*amount, category, date).unwrap())
            .collect();
        Ledger::new(expenses, budget)
    }

    #[test]
    fn exceeded_budget_zeroes_savings_and_raises_alert() {
        let summary = SummaryService::project(&ledger(&[(150.0, "food")], Some(100.0)));
        assert!(summary.budget_exceeded);
        assert_eq!(summary.saved_amount, 0.0);
        let alert = summary.alert.expect("alert");
        assert_eq!(alert.title, "Budget exceeded");
        assert_eq!(alert.body, "You spent ₹150.00 > budget ₹100");
    }

    #[test]
    fn remaining_budget_is_reported_as_saved() {
        let summary = SummaryService::project(&ledger(&[(150.0, "food")], Some(200.0)));
        assert!(!summary.budget_exceeded);
        assert_eq!(summary.saved_amount, 50.0);
        assert!(summary.alert.is_none());
    }

    #[test]
    fn spending_exactly_the_budget_is_not_exceeded() {
        let summary = SummaryService::project(&ledger(&[(100.0, "food")], Some(100.0)));
        assert!(!summary.budget_exceeded);
        assert_eq!(summary.saved_amount, 0.0);
    }

    #[test]
    fn no_budget_means_nothing_saved_and_no_alert() {
        let summary = SummaryService::project(&ledger(&[(80.0, "food")], None));
        assert_eq!(summary.saved_amount, 0.0);
        assert!(!summary.budget_exceeded);
        assert!(summary.alert.is_none());
    }

    #[test]
    fn empty_breakdown_uses_placeholder_slice() {
        let chart = SummaryService::expense_breakdown(&Ledger::default());
        assert_eq!(chart.labels, vec!["No Data"]);
        assert_eq!(chart.values, vec![1.0]);
    }
}
