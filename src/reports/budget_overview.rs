//! Budget-vs-actual report
//!
//! One row per budget entry, joined against actual expense totals. The join
//! is budget-driven: a budgeted category with no expenses gets an actual of
//! zero, while spending in an unbudgeted category produces no row.

use crate::ledger::Ledger;
use crate::models::{Category, Money};

/// Budget performance for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    /// The budgeted category
    pub category: Category,
    /// Budget limit (always positive)
    pub limit: Money,
    /// Actual expense total, zero when nothing was spent
    pub actual: Money,
    /// limit - actual (negative when over budget)
    pub remaining: Money,
    /// actual / limit * 100; may exceed 100, never clamped
    pub percentage_used: f64,
}

impl BudgetRow {
    /// Check if spending has exceeded the limit
    pub fn is_over_budget(&self) -> bool {
        self.actual > self.limit
    }
}

/// Budget-vs-actual comparison across all budgeted categories
#[derive(Debug, Clone, Default)]
pub struct BudgetOverview {
    /// One row per budget, in budget insertion order
    pub rows: Vec<BudgetRow>,
}

impl BudgetOverview {
    /// Compute the overview from a ledger snapshot
    pub fn compute(ledger: &Ledger) -> Self {
        let rows = ledger
            .budgets()
            .iter()
            .map(|budget| {
                let actual: Money = ledger
                    .transactions()
                    .iter()
                    .filter(|t| t.is_expense() && t.category == budget.category)
                    .map(|t| t.amount)
                    .sum();

                BudgetRow {
                    category: budget.category,
                    limit: budget.limit,
                    actual,
                    remaining: budget.limit - actual,
                    percentage_used: actual.percent_of(budget.limit),
                }
            })
            .collect();

        Self { rows }
    }

    /// Check if any budgets are set
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of categories currently over budget
    pub fn over_budget_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_over_budget()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn expense(category: Category, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "",
            category,
            Money::from_cents(cents),
            TransactionKind::Expense,
        )
    }

    #[test]
    fn test_empty_ledger_yields_no_rows() {
        let overview = BudgetOverview::compute(&Ledger::new());
        assert!(overview.is_empty());
        assert_eq!(overview.over_budget_count(), 0);
    }

    #[test]
    fn test_budget_with_no_expenses() {
        let mut ledger = Ledger::new();
        ledger.upsert_budget(Category::Food, Money::from_cents(10000));

        let overview = BudgetOverview::compute(&ledger);
        assert_eq!(overview.rows.len(), 1);

        let row = &overview.rows[0];
        assert_eq!(row.actual, Money::zero());
        assert_eq!(row.remaining, Money::from_cents(10000));
        assert_eq!(row.percentage_used, 0.0);
        assert!(!row.is_over_budget());
    }

    #[test]
    fn test_unbudgeted_spending_produces_no_row() {
        let mut ledger = Ledger::new();
        ledger.upsert_budget(Category::Food, Money::from_cents(10000));
        ledger.add_transaction(expense(Category::Rent, 90000));

        let overview = BudgetOverview::compute(&ledger);
        assert_eq!(overview.rows.len(), 1);
        assert_eq!(overview.rows[0].category, Category::Food);
    }

    #[test]
    fn test_joined_row_values() {
        let mut ledger = Ledger::new();
        ledger.upsert_budget(Category::Food, Money::from_cents(10000));
        ledger.add_transaction(expense(Category::Food, 5000));
        ledger.add_transaction(expense(Category::Food, 3000));
        // Income in the same category must not count toward actual
        ledger.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            "refund",
            Category::Food,
            Money::from_cents(700),
            TransactionKind::Income,
        ));

        let overview = BudgetOverview::compute(&ledger);
        let row = &overview.rows[0];
        assert_eq!(row.actual.cents(), 8000);
        assert_eq!(row.remaining.cents(), 2000);
        assert!((row.percentage_used - 80.0).abs() < 1e-9);
        assert!(!row.is_over_budget());
    }

    #[test]
    fn test_over_budget_is_flagged_not_clamped() {
        let mut ledger = Ledger::new();
        ledger.upsert_budget(Category::Entertainment, Money::from_cents(5000));
        ledger.add_transaction(expense(Category::Entertainment, 7500));

        let overview = BudgetOverview::compute(&ledger);
        let row = &overview.rows[0];
        assert_eq!(row.remaining.cents(), -2500);
        assert!((row.percentage_used - 150.0).abs() < 1e-9);
        assert!(row.is_over_budget());
        assert_eq!(overview.over_budget_count(), 1);
    }
}
