use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Currencies the comparison set can be scoped to.
pub const SUPPORTED_CURRENCIES: [&str; 21] = [
    "USD", "EUR", "AUD", "GBP", "CAD", "CZK", "DKK", "HKD", "INR", "ILS", "MXN", "NZD", "NOK",
    "PLN", "RUB", "SGD", "ZAR", "LKR", "SEK", "CHF", "VND",
];

/// Integer percentage gates for the two sequential similarity checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub address: u8,
    pub name: u8,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            address: 80,
            name: 80,
        }
    }
}

/// Everything a single batch run needs, held constant for its duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    pub currency: String,
    /// Take payment terms from the acquisition file instead of the default.
    #[serde(default)]
    pub use_provided_terms: bool,
    /// Load the new accounts under the prospect profile instead of customer.
    #[serde(default)]
    pub prospect: bool,
    /// Output format: csv | xlsx | both.
    pub format: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::default(),
            currency: "USD".into(),
            use_provided_terms: false,
            prospect: false,
            format: "csv".into(),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thresholds.address > 100 {
            return Err(ConfigError::InvalidValue {
                field: "thresholds.address",
                reason: format!("{} not in 0..=100", self.thresholds.address),
            });
        }
        if self.thresholds.name > 100 {
            return Err(ConfigError::InvalidValue {
                field: "thresholds.name",
                reason: format!("{} not in 0..=100", self.thresholds.name),
            });
        }
        if !SUPPORTED_CURRENCIES.contains(&self.currency.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "currency",
                reason: format!("unsupported: {}", self.currency),
            });
        }
        match self.format.as_str() {
            "csv" | "xlsx" | "both" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "format",
                    reason: format!("unsupported: {}", other),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = RunConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.thresholds.address, 80);
        assert_eq!(cfg.thresholds.name, 80);
    }

    #[test]
    fn threshold_over_100_is_rejected() {
        let cfg = RunConfig {
            thresholds: ThresholdConfig {
                address: 101,
                name: 80,
            },
            ..RunConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let cfg = RunConfig {
            currency: "XXX".into(),
            ..RunConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let cfg = RunConfig {
            format: "parquet".into(),
            ..RunConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
