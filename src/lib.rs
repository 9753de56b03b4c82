#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps an in-memory ledger of expenses, filters it by amount
//! or category, and renders it as a table through a controller/view pair.

pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod ledger;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
