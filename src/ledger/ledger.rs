use super::expense::ExpenseRecord;

/// In-memory ledger state: the ordered expense sequence plus the budget scalar.
///
/// Aggregates are recomputed from `expenses` on every call; nothing derived is
/// cached or persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub expenses: Vec<ExpenseRecord>,
    pub budget: Option<f64>,
}

/// Summed spend for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

impl Ledger {
    pub fn new(expenses: Vec<ExpenseRecord>, budget: Option<f64>) -> Self {
        Self { expenses, budget }
    }

    pub fn push(&mut self, record: ExpenseRecord) {
        self.expenses.push(record);
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|record| record.amount).sum()
    }

    /// Per-category sums, ordered by first appearance of each category.
    pub fn by_category(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for record in &self.expenses {
            match totals
                .iter_mut()
                .find(|total| total.category == record.category)
            {
                Some(total) => total.amount += record.amount,
                None => totals.push(CategoryTotal {
                    category: record.category.clone(),
                    amount: record.amount,
                }),
            }
        }
        totals
    }

    /// Category with the largest sum; the first-encountered category wins ties.
    pub fn top_category(&self) -> Option<CategoryTotal> {
        self.by_category().into_iter().fold(None, |best, candidate| match best {
            Some(current) if current.amount >= candidate.amount => Some(current),
            _ => Some(candidate),
        })
    }

    /// Records in display order, most recently added first.
    pub fn expenses_latest_first(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.expenses.iter().rev()
    }
}
