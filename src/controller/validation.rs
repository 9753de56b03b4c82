use crate::{config::Config, errors::LedgerError};

/// Input rules applied before a transaction reaches the ledger.
///
/// Amounts must be finite and positive and categories non-blank; the
/// configuration may additionally cap amounts and restrict categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputValidator {
    max_amount: Option<f64>,
    allowed_categories: Option<Vec<String>>,
}

impl InputValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            max_amount: config.max_amount,
            allowed_categories: config.allowed_categories.clone(),
        }
    }

    pub fn validate_amount(&self, amount: f64) -> Result<(), LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        match self.max_amount {
            Some(max) if amount > max => Err(LedgerError::AmountTooLarge { amount, max }),
            _ => Ok(()),
        }
    }

    pub fn validate_category(&self, category: &str) -> Result<(), LedgerError> {
        if category.trim().is_empty() {
            return Err(LedgerError::EmptyCategory);
        }
        match &self.allowed_categories {
            Some(allowed) if !allowed.iter().any(|entry| entry == category) => {
                Err(LedgerError::CategoryNotAllowed(category.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn validate(&self, amount: f64, category: &str) -> Result<(), LedgerError> {
        self.validate_amount(amount)?;
        self.validate_category(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rules() {
        let validator = InputValidator::new();
        assert!(validator.validate(0.01, "food").is_ok());
        assert_eq!(validator.validate(0.0, "food"), Err(LedgerError::InvalidAmount(0.0)));
        assert_eq!(
            validator.validate(-1.0, "fruits"),
            Err(LedgerError::InvalidAmount(-1.0))
        );
        assert_eq!(validator.validate(5.0, " "), Err(LedgerError::EmptyCategory));
        assert!(validator.validate(1_000_000.0, "anything").is_ok());
    }

    #[test]
    fn configured_limits() {
        let mut config = Config::default();
        config.max_amount = Some(1000.0);
        config.allowed_categories = Some(vec!["food".into(), "travel".into()]);
        let validator = InputValidator::from_config(&config);

        assert!(validator.validate(1000.0, "food").is_ok());
        assert_eq!(
            validator.validate(1000.5, "food"),
            Err(LedgerError::AmountTooLarge {
                amount: 1000.5,
                max: 1000.0
            })
        );
        assert_eq!(
            validator.validate(10.0, "Food"),
            Err(LedgerError::CategoryNotAllowed("Food".into()))
        );
    }
}
