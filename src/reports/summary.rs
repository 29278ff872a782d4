//! Financial summary
//!
//! Overall income/expense totals and the resulting net balance.

use crate::ledger::Ledger;
use crate::models::Money;

/// Totals across the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinancialSummary {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expense amounts
    pub total_expenses: Money,
    /// total_income - total_expenses
    pub net_balance: Money,
}

impl FinancialSummary {
    /// Compute the summary from a ledger snapshot
    pub fn compute(ledger: &Ledger) -> Self {
        let total_income: Money = ledger
            .transactions()
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();

        let total_expenses: Money = ledger
            .transactions()
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        Self {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
        }
    }

    /// Check if the ledger is spending more than it earns
    pub fn is_in_deficit(&self) -> bool {
        self.net_balance.is_negative()
    }
}
