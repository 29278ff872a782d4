//! Monthly trend report
//!
//! Groups transactions by (calendar month, kind) and sums amounts within
//! each group. Rows are ordered ascending by month key ("2024-03"), so the
//! sequence is ready for time-series display.

use std::collections::BTreeMap;

use crate::ledger::Ledger;
use crate::models::{Money, TransactionKind};

/// Summed amount for one (month, kind) group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTrendRow {
    /// Year-month key, e.g. "2024-03"
    pub month: String,
    /// Income or expense
    pub kind: TransactionKind,
    /// Sum of amounts in this group
    pub total: Money,
}

/// Time-series aggregation of the ledger by month and kind
#[derive(Debug, Clone, Default)]
pub struct MonthlyTrend {
    /// One row per non-empty (month, kind) group, ascending by month
    pub rows: Vec<MonthlyTrendRow>,
}

impl MonthlyTrend {
    /// Compute the trend from a ledger snapshot
    pub fn compute(ledger: &Ledger) -> Self {
        let mut groups: BTreeMap<(String, TransactionKind), Money> = BTreeMap::new();

        for txn in ledger.transactions() {
            let entry = groups
                .entry((txn.month_key(), txn.kind))
                .or_insert_with(Money::zero);
            *entry += txn.amount;
        }

        let rows = groups
            .into_iter()
            .map(|((month, kind), total)| MonthlyTrendRow { month, kind, total })
            .collect();

        Self { rows }
    }

    /// Check if there is any data
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct month keys, ascending
    pub fn months(&self) -> Vec<String> {
        let mut months: Vec<String> = Vec::new();
        for row in &self.rows {
            if months.last() != Some(&row.month) {
                months.push(row.month.clone());
            }
        }
        months
    }

    /// Per-month totals for one kind, aligned to `months()` and zero-filled
    ///
    /// The zero-filling exists only so both chart lines share an x-axis; the
    /// row set itself never contains empty groups.
    pub fn series_for(&self, kind: TransactionKind) -> Vec<(String, Money)> {
        self.months()
            .into_iter()
            .map(|month| {
                let total = self
                    .rows
                    .iter()
                    .find(|r| r.month == month && r.kind == kind)
                    .map(|r| r.total)
                    .unwrap_or_else(Money::zero);
                (month, total)
            })
            .collect()
    }

    /// Sum of all row totals for one kind
    pub fn total_for(&self, kind: TransactionKind) -> Money {
        self.rows
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.total)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Transaction};
    use crate::reports::FinancialSummary;
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, cents: i64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            "",
            Category::Other,
            Money::from_cents(cents),
            kind,
        )
    }

    #[test]
    fn test_empty_ledger_yields_no_rows() {
        let trend = MonthlyTrend::compute(&Ledger::new());
        assert!(trend.is_empty());
        assert!(trend.months().is_empty());
        assert!(trend.series_for(TransactionKind::Income).is_empty());
    }

    #[test]
    fn test_groups_by_month_and_kind() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(txn(2024, 1, 5, 5000, TransactionKind::Expense));
        ledger.add_transaction(txn(2024, 1, 20, 2000, TransactionKind::Expense));
        ledger.add_transaction(txn(2024, 1, 1, 100000, TransactionKind::Income));
        ledger.add_transaction(txn(2024, 2, 10, 3000, TransactionKind::Expense));

        let trend = MonthlyTrend::compute(&ledger);
        assert_eq!(trend.rows.len(), 3);
        assert_eq!(trend.months(), vec!["2024-01", "2024-02"]);

        let jan_expense = trend
            .rows
            .iter()
            .find(|r| r.month == "2024-01" && r.kind == TransactionKind::Expense)
            .unwrap();
        assert_eq!(jan_expense.total.cents(), 7000);
    }

    #[test]
    fn test_rows_ascend_by_month() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(txn(2024, 3, 1, 100, TransactionKind::Expense));
        ledger.add_transaction(txn(2023, 11, 1, 100, TransactionKind::Expense));
        ledger.add_transaction(txn(2024, 1, 1, 100, TransactionKind::Expense));

        let trend = MonthlyTrend::compute(&ledger);
        assert_eq!(trend.months(), vec!["2023-11", "2024-01", "2024-03"]);
    }

    #[test]
    fn test_series_zero_fills_missing_months() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(txn(2024, 1, 1, 100000, TransactionKind::Income));
        ledger.add_transaction(txn(2024, 2, 10, 3000, TransactionKind::Expense));

        let trend = MonthlyTrend::compute(&ledger);
        let income = trend.series_for(TransactionKind::Income);
        assert_eq!(income.len(), 2);
        assert_eq!(income[0], ("2024-01".to_string(), Money::from_cents(100000)));
        assert_eq!(income[1], ("2024-02".to_string(), Money::zero()));
    }

    #[test]
    fn test_trend_totals_match_summary() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(txn(2024, 1, 5, 5000, TransactionKind::Expense));
        ledger.add_transaction(txn(2024, 2, 10, 3000, TransactionKind::Expense));
        ledger.add_transaction(txn(2024, 2, 1, 150000, TransactionKind::Income));
        ledger.add_transaction(txn(2024, 4, 1, 25000, TransactionKind::Income));

        let trend = MonthlyTrend::compute(&ledger);
        let summary = FinancialSummary::compute(&ledger);

        assert_eq!(trend.total_for(TransactionKind::Expense), summary.total_expenses);
        assert_eq!(trend.total_for(TransactionKind::Income), summary.total_income);
    }
}
