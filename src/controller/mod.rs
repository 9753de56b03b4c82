//! Mediates between the ledger and its view.

pub mod validation;

use uuid::Uuid;

use crate::{
    errors::Result,
    ledger::{Filter, Ledger, Transaction, TransactionFilter},
    view::LedgerView,
};
pub use validation::InputValidator;

/// Validates input, mutates the ledger, and keeps the view in sync.
///
/// The ledger and view are handed in at construction; the view only ever sees
/// the ledger's transactions through [`LedgerView::refresh`].
pub struct ExpenseTrackerController<V: LedgerView> {
    ledger: Ledger,
    view: V,
    validator: InputValidator,
    filter: Option<Filter>,
}

impl<V: LedgerView> ExpenseTrackerController<V> {
    pub fn new(ledger: Ledger, view: V) -> Self {
        Self::with_validator(ledger, view, InputValidator::new())
    }

    pub fn with_validator(ledger: Ledger, view: V, validator: InputValidator) -> Self {
        let mut controller = Self {
            ledger,
            view,
            validator,
            filter: None,
        };
        controller.refresh();
        controller
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn set_validator(&mut self, validator: InputValidator) {
        self.validator = validator;
    }

    /// Records a new transaction; returns `false` and leaves the ledger
    /// untouched when the input is rejected.
    pub fn add_transaction(&mut self, amount: f64, category: &str) -> bool {
        self.try_add_transaction(amount, category).is_ok()
    }

    pub fn try_add_transaction(&mut self, amount: f64, category: &str) -> Result<Uuid> {
        if let Err(err) = self.validator.validate(amount, category) {
            tracing::warn!(amount, category, error = %err, "rejected transaction input");
            return Err(err);
        }
        let transaction = Transaction::new(amount, category)?;
        let id = self.ledger.add_transaction(transaction);
        self.refresh();
        Ok(id)
    }

    /// Removes the transaction shown at `row` (0-based).
    pub fn remove_transaction(&mut self, row: usize) -> Result<Transaction> {
        let removed = self.ledger.remove_at(row).map_err(|err| {
            tracing::warn!(row, error = %err, "undo rejected");
            err
        })?;
        self.refresh();
        Ok(removed)
    }

    pub fn set_filter(&mut self, filter: impl Into<Filter>) {
        let filter = filter.into();
        tracing::debug!(%filter, "filter set");
        self.filter = Some(filter);
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.refresh();
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// Refreshes the view and highlights the rows matching the active
    /// filter, returning them.
    pub fn apply_filter(&mut self) -> Vec<usize> {
        self.view.refresh(self.ledger.transactions());
        self.highlight_matches()
    }

    pub fn refresh(&mut self) {
        self.view.refresh(self.ledger.transactions());
        if self.filter.is_some() {
            self.highlight_matches();
        }
    }

    fn highlight_matches(&mut self) -> Vec<usize> {
        let rows = self
            .filter
            .as_ref()
            .map(|filter| filter.matching_rows(self.ledger.transactions()))
            .unwrap_or_default();
        self.view.highlight_rows(&rows);
        rows
    }
}
