//! Predicates that derive filtered views of a ledger without mutating it.

use std::fmt;

use super::transaction::Transaction;

/// Selects transactions from a sequence, preserving their order.
pub trait TransactionFilter {
    fn matches(&self, transaction: &Transaction) -> bool;

    fn filter<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| self.matches(txn))
            .collect()
    }

    /// Positions of the matching transactions within `transactions`.
    fn matching_rows(&self, transactions: &[Transaction]) -> Vec<usize> {
        transactions
            .iter()
            .enumerate()
            .filter(|(_, txn)| self.matches(txn))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Keeps transactions whose amount equals the target exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountFilter {
    target: f64,
}

impl AmountFilter {
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl TransactionFilter for AmountFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        transaction.amount() == self.target
    }
}

/// Keeps transactions whose category equals the target (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    target: String,
}

impl CategoryFilter {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl TransactionFilter for CategoryFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        transaction.category() == self.target
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Amount(AmountFilter),
    Category(CategoryFilter),
}

impl Filter {
    pub fn amount(target: f64) -> Self {
        Filter::Amount(AmountFilter::new(target))
    }

    pub fn category(target: impl Into<String>) -> Self {
        Filter::Category(CategoryFilter::new(target))
    }
}

impl TransactionFilter for Filter {
    fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Filter::Amount(inner) => inner.matches(transaction),
            Filter::Category(inner) => inner.matches(transaction),
        }
    }
}

impl From<AmountFilter> for Filter {
    fn from(filter: AmountFilter) -> Self {
        Filter::Amount(filter)
    }
}

impl From<CategoryFilter> for Filter {
    fn from(filter: CategoryFilter) -> Self {
        Filter::Category(filter)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Amount(inner) => write!(f, "amount = {:.2}", inner.target()),
            Filter::Category(inner) => write!(f, "category = \"{}\"", inner.target()),
        }
    }
}
