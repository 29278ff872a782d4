//! Transaction model
//!
//! A transaction records a single dated income or expense. The amount is
//! always strictly positive; direction is carried by the kind, never by sign.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Get the display name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// The other kind (for toggle widgets)
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// Error returned when a string is not a known transaction kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown transaction type: {}", self.0)
    }
}

impl std::error::Error for ParseKindError {}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// Spending/income category
    pub category: Category,

    /// Amount, strictly positive
    pub amount: Money,

    /// Whether this is income or an expense
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
        amount: Money,
        kind: TransactionKind,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category,
            amount,
            kind,
        }
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with income positive and expenses negative
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Year-month grouping key for this transaction ("2024-03")
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.category,
            self.kind
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            date(2024, 1, 5),
            "Groceries",
            Category::Food,
            Money::from_cents(5000),
            TransactionKind::Expense,
        );

        assert_eq!(txn.category, Category::Food);
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::new(
            date(2024, 1, 1),
            "Paycheck",
            Category::Other,
            Money::from_cents(200000),
            TransactionKind::Income,
        );
        let expense = Transaction::new(
            date(2024, 1, 2),
            "Bus fare",
            Category::Transport,
            Money::from_cents(250),
            TransactionKind::Expense,
        );

        assert_eq!(income.signed_amount().cents(), 200000);
        assert_eq!(expense.signed_amount().cents(), -250);
    }

    #[test]
    fn test_month_key() {
        let txn = Transaction::new(
            date(2024, 3, 17),
            "",
            Category::Rent,
            Money::from_cents(90000),
            TransactionKind::Expense,
        );
        assert_eq!(txn.month_key(), "2024-03");
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let mut txn = Transaction::new(
            date(2024, 1, 5),
            "",
            Category::Food,
            Money::zero(),
            TransactionKind::Expense,
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        txn.amount = Money::from_cents(-100);
        assert!(txn.validate().is_err());

        txn.amount = Money::from_cents(1);
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            date(2024, 2, 10),
            "Movie night",
            Category::Entertainment,
            Money::from_cents(1500),
            TransactionKind::Expense,
        );

        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
