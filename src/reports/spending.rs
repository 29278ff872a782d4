//! Expense breakdown report
//!
//! Spending by category, expenses only. Categories with no expenses are
//! omitted rather than zero-filled.

use std::collections::BTreeMap;

use crate::ledger::Ledger;
use crate::models::{Category, Money};

/// Expense total for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    /// The category
    pub category: Category,
    /// Sum of expense amounts in this category
    pub total: Money,
    /// Share of total expenses, 0-100
    pub percentage: f64,
}

/// Expense totals grouped by category
#[derive(Debug, Clone, Default)]
pub struct SpendingBreakdown {
    /// One row per category with at least one expense, in category order
    pub rows: Vec<CategorySpending>,
    /// Sum of all expense amounts
    pub total_expenses: Money,
}

impl SpendingBreakdown {
    /// Compute the breakdown from a ledger snapshot
    pub fn compute(ledger: &Ledger) -> Self {
        let mut by_category: BTreeMap<Category, Money> = BTreeMap::new();

        for txn in ledger.transactions().iter().filter(|t| t.is_expense()) {
            let entry = by_category
                .entry(txn.category)
                .or_insert_with(Money::zero);
            *entry += txn.amount;
        }

        let total_expenses: Money = by_category.values().copied().sum();

        // BTreeMap iteration follows the enum's declaration order
        let rows = by_category
            .into_iter()
            .map(|(category, total)| CategorySpending {
                category,
                total,
                percentage: total.percent_of(total_expenses),
            })
            .collect();

        Self {
            rows,
            total_expenses,
        }
    }

    /// Check if there is any expense data
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row with the largest total, if any
    pub fn top_category(&self) -> Option<&CategorySpending> {
        self.rows.iter().max_by_key(|r| r.total)
    }
}
