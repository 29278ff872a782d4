//! Aggregation reports over the ledger
//!
//! Every report is a pure value computed from a `&Ledger` snapshot. Empty
//! input yields empty output, never an error. `DashboardSnapshot` bundles
//! all of them and is recomputed explicitly after each mutation, so the
//! render step only ever reads precomputed results.

pub mod budget_overview;
pub mod monthly;
pub mod spending;
pub mod summary;

pub use budget_overview::{BudgetOverview, BudgetRow};
pub use monthly::{MonthlyTrend, MonthlyTrendRow};
pub use spending::{CategorySpending, SpendingBreakdown};
pub use summary::FinancialSummary;

use crate::ledger::Ledger;

/// All dashboard aggregates, computed in one pass over the ledger
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// Income/expense totals and net balance
    pub summary: FinancialSummary,
    /// Per-month income and expense series
    pub monthly: MonthlyTrend,
    /// Expense totals by category
    pub spending: SpendingBreakdown,
    /// Budget-vs-actual rows
    pub budgets: BudgetOverview,
}

impl DashboardSnapshot {
    /// Recompute every report from the current ledger contents
    pub fn compute(ledger: &Ledger) -> Self {
        Self {
            summary: FinancialSummary::compute(ledger),
            monthly: MonthlyTrend::compute(ledger),
            spending: SpendingBreakdown::compute(ledger),
            budgets: BudgetOverview::compute(ledger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Transaction, TransactionKind};
    use chrono::NaiveDate;

    #[test]
    fn test_snapshot_of_empty_ledger() {
        let snapshot = DashboardSnapshot::compute(&Ledger::new());
        assert_eq!(snapshot.summary.net_balance, Money::zero());
        assert!(snapshot.monthly.is_empty());
        assert!(snapshot.spending.is_empty());
        assert!(snapshot.budgets.is_empty());
    }

    // The worked example: two Food expenses across two months plus a Food
    // budget of 100.00.
    #[test]
    fn test_two_month_food_scenario() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "groceries",
            Category::Food,
            Money::from_cents(5000),
            TransactionKind::Expense,
        ));
        ledger.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            "groceries",
            Category::Food,
            Money::from_cents(3000),
            TransactionKind::Expense,
        ));
        ledger.upsert_budget(Category::Food, Money::from_cents(10000));

        let snapshot = DashboardSnapshot::compute(&ledger);

        assert_eq!(snapshot.summary.total_expenses.cents(), 8000);

        let food = &snapshot.budgets.rows[0];
        assert_eq!(food.category, Category::Food);
        assert_eq!(food.actual.cents(), 8000);
        assert_eq!(food.remaining.cents(), 2000);
        assert!((food.percentage_used - 80.0).abs() < 1e-9);

        let expense_rows: Vec<_> = snapshot
            .monthly
            .rows
            .iter()
            .filter(|r| r.kind == TransactionKind::Expense)
            .collect();
        assert_eq!(expense_rows.len(), 2);
        assert_eq!(expense_rows[0].month, "2024-01");
        assert_eq!(expense_rows[0].total.cents(), 5000);
        assert_eq!(expense_rows[1].month, "2024-02");
        assert_eq!(expense_rows[1].total.cents(), 3000);
    }
}
