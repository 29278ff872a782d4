//! Budget model
//!
//! A budget is a per-category spending limit. The ledger enforces at most
//! one budget per category (last write wins).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A per-category spending limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// The category this limit applies to
    pub category: Category,

    /// Spending limit, strictly positive
    pub limit: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: Category, limit: Money) -> Self {
        Self { category, limit }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be greater than zero (got {})", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new(Category::Food, Money::from_cents(10000));
        assert_eq!(budget.category, Category::Food);
        assert_eq!(budget.limit.cents(), 10000);
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let budget = Budget::new(Category::Rent, Money::zero());
        assert!(matches!(
            budget.validate(),
            Err(BudgetValidationError::NonPositiveLimit(_))
        ));
    }

    #[test]
    fn test_display() {
        let budget = Budget::new(Category::Utilities, Money::from_cents(7500));
        assert_eq!(budget.to_string(), "Utilities: $75.00");
    }
}
