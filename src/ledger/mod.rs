//! Transaction ledger, its records, and the filters applied over it.

pub mod filter;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use filter::{AmountFilter, CategoryFilter, Filter, TransactionFilter};
pub use ledger::Ledger;
pub use transaction::{is_valid_date_format, Transaction, DEFAULT_DATE_FORMAT};
