use uuid::Uuid;

use super::transaction::Transaction;
use crate::errors::{LedgerError, Result};

/// Ordered, in-memory collection of recorded transactions.
///
/// Insertion order is preserved and duplicates are kept. Removal locates
/// transactions by identity (their id), so clones of a transaction refer to
/// the same entry.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id();
        tracing::debug!(
            %id,
            amount = transaction.amount(),
            category = transaction.category(),
            "transaction added"
        );
        self.transactions.push(transaction);
        id
    }

    /// Removes the first entry sharing `transaction`'s identity.
    ///
    /// The ledger is left untouched when no such entry exists.
    pub fn remove_transaction(&mut self, transaction: &Transaction) -> Result<Transaction> {
        let id = transaction.id();
        let position = self
            .transactions
            .iter()
            .position(|candidate| candidate.id() == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        tracing::debug!(%id, "transaction removed");
        Ok(self.transactions.remove(position))
    }

    /// Removes the transaction at `index`, counting from the oldest entry.
    pub fn remove_at(&mut self, index: usize) -> Result<Transaction> {
        if index >= self.transactions.len() {
            return Err(LedgerError::RowOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }
        let removed = self.transactions.remove(index);
        tracing::debug!(id = %removed.id(), index, "transaction removed");
        Ok(removed)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn total_cost(&self) -> f64 {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(amount: f64, category: &str) -> Transaction {
        Transaction::new(amount, category).unwrap()
    }

    #[test]
    fn empty_ledger_totals_zero() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_cost(), 0.0);
    }

    #[test]
    fn add_preserves_order_and_duplicates() {
        let mut ledger = Ledger::new();
        let first = txn(10.0, "food");
        let duplicate = txn(10.0, "food");
        ledger.add_transaction(first.clone());
        ledger.add_transaction(duplicate.clone());
        ledger.add_transaction(txn(2.5, "bills"));

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.transactions()[0].id(), first.id());
        assert_eq!(ledger.transactions()[1].id(), duplicate.id());
        assert!((ledger.total_cost() - 22.5).abs() < 1e-9);
    }

    #[test]
    fn remove_uses_identity_not_value() {
        let mut ledger = Ledger::new();
        let first = txn(10.0, "food");
        let second = txn(10.0, "food");
        ledger.add_transaction(first.clone());
        ledger.add_transaction(second.clone());

        let removed = ledger.remove_transaction(&second).unwrap();
        assert_eq!(removed.id(), second.id());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.transactions()[0].id(), first.id());
    }

    #[test]
    fn remove_missing_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        let kept = txn(40.0, "travel");
        ledger.add_transaction(kept.clone());
        let stranger = txn(40.0, "travel");

        let err = ledger.remove_transaction(&stranger).unwrap_err();
        assert_eq!(err, LedgerError::TransactionNotFound(stranger.id()));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total_cost(), 40.0);
    }

    #[test]
    fn remove_at_out_of_range() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.remove_at(0).unwrap_err(),
            LedgerError::RowOutOfRange { index: 0, len: 0 }
        );
        ledger.add_transaction(txn(1.0, "other"));
        assert!(ledger.remove_at(1).is_err());
        assert_eq!(ledger.remove_at(0).unwrap().amount(), 1.0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let mut ledger = Ledger::new();
        let id = ledger.add_transaction(txn(3.0, "food"));
        assert_eq!(ledger.transaction(id).map(Transaction::category), Some("food"));
        assert!(ledger.transaction(Uuid::new_v4()).is_none());
    }
}
