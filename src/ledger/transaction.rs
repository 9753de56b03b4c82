use std::fmt::Write;

use chrono::{
    format::{Item, StrftimeItems},
    DateTime, Local, Utc,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{LedgerError, Result};

/// Default rendering of [`Transaction::timestamp`]: day-month-year hour:minute.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Whether `format` is a `strftime` pattern chrono can render.
pub fn is_valid_date_format(format: &str) -> bool {
    !format.trim().is_empty() && StrftimeItems::new(format).all(|item| item != Item::Error)
}

/// A single recorded expense. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    id: Uuid,
    amount: f64,
    category: String,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction stamped with the current time.
    ///
    /// Fails when `amount` is not a finite positive number or `category` is
    /// blank.
    pub fn new(amount: f64, category: impl Into<String>) -> Result<Self> {
        Self::with_timestamp(amount, category, Utc::now())
    }

    pub fn with_timestamp(
        amount: f64,
        category: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        let category = category.into();
        if category.trim().is_empty() {
            return Err(LedgerError::EmptyCategory);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            category,
            timestamp,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Formats the creation time in local time using a `strftime` pattern.
    /// Patterns chrono cannot render fall back to [`DEFAULT_DATE_FORMAT`].
    pub fn timestamp_label(&self, format: &str) -> String {
        let local = self.timestamp.with_timezone(&Local);
        let mut label = String::new();
        if write!(label, "{}", local.format(format)).is_ok() {
            return label;
        }
        local.format(DEFAULT_DATE_FORMAT).to_string()
    }
}
