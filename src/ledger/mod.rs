//! In-memory ledger store
//!
//! The ledger owns all transactions and budgets for a session. It is created
//! by the hosting process and passed by reference into the dashboard; nothing
//! here touches the filesystem, and the contents are dropped with the session.

use crate::models::{Budget, Category, Money, Transaction};

/// The session's transactions and budgets
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Ordered transaction sequence (append-only)
    transactions: Vec<Transaction>,

    /// Per-category budgets, at most one entry per category
    budgets: Vec<Budget>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction to the ordered sequence
    pub fn add_transaction(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Set the budget for a category, replacing any existing entry
    pub fn upsert_budget(&mut self, category: Category, limit: Money) {
        self.budgets.retain(|b| b.category != category);
        self.budgets.push(Budget::new(category, limit));
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All budgets in insertion order
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Look up the budget limit for a category
    pub fn budget_for(&self, category: Category) -> Option<Money> {
        self.budgets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.limit)
    }

    /// Check if any transactions have been recorded
    pub fn has_transactions(&self) -> bool {
        !self.transactions.is_empty()
    }

    /// Check if any budgets have been set
    pub fn has_budgets(&self) -> bool {
        !self.budgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(day: u32, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            "",
            Category::Food,
            Money::from_cents(cents),
            TransactionKind::Expense,
        )
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(!ledger.has_transactions());
        assert!(!ledger.has_budgets());
        assert!(ledger.transactions().is_empty());
        assert!(ledger.budgets().is_empty());
        assert_eq!(ledger.budget_for(Category::Food), None);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(txn(5, 100));
        ledger.add_transaction(txn(2, 200));
        ledger.add_transaction(txn(9, 300));

        let amounts: Vec<i64> = ledger
            .transactions()
            .iter()
            .map(|t| t.amount.cents())
            .collect();
        assert_eq!(amounts, vec![100, 200, 300]);
    }

    #[test]
    fn test_upsert_budget_last_write_wins() {
        let mut ledger = Ledger::new();
        ledger.upsert_budget(Category::Food, Money::from_cents(10000));
        ledger.upsert_budget(Category::Rent, Money::from_cents(90000));
        ledger.upsert_budget(Category::Food, Money::from_cents(12000));

        // Exactly one entry for Food, carrying the later value
        let food_budgets: Vec<&Budget> = ledger
            .budgets()
            .iter()
            .filter(|b| b.category == Category::Food)
            .collect();
        assert_eq!(food_budgets.len(), 1);
        assert_eq!(food_budgets[0].limit.cents(), 12000);

        assert_eq!(ledger.budgets().len(), 2);
        assert_eq!(
            ledger.budget_for(Category::Food),
            Some(Money::from_cents(12000))
        );
        assert_eq!(
            ledger.budget_for(Category::Rent),
            Some(Money::from_cents(90000))
        );
    }
}
