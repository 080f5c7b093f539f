//! # Console configuration: `library.toml`
//!
//! Defines `library.toml`, the TOML file the web binary embeds at build time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//!
//! [loans]
//! period_days = 14        # due date = loan date + period_days
//!
//! [catalog]
//! low_stock_threshold = 5 # stock below this shows a "low stock" badge
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ConsoleConfig`] | Top-level config with a builder helper and TOML parsing. |
//! | [`ApiConfig`] | REST backend location. |
//! | [`LoanConfig`] | Loan period used by the borrow form. |
//! | [`CatalogConfig`] | Display thresholds for the catalog tables. |
//!
//! Every section and field has a default, so an empty file is the default
//! configuration.

use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid library.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Top-level configuration stored in `library.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub loans: LoanConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoanConfig {
    #[serde(default = "default_period_days")]
    pub period_days: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_period_days() -> u32 {
    DEFAULT_LOAN_PERIOD_DAYS
}

fn default_low_stock_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            period_days: default_period_days(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

impl ConsoleConfig {
    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".into()));
        }
        if self.loans.period_days == 0 {
            return Err(ConfigError::Invalid("loans.period_days must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.loans.period_days, 14);
        assert_eq!(config.catalog.low_stock_threshold, 5);
    }

    #[test]
    fn test_partial_sections() {
        let config = ConsoleConfig::from_toml("[loans]\nperiod_days = 7\n").unwrap();
        assert_eq!(config.loans.period_days, 7);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let config = ConsoleConfig::from_toml("[loans]\nperiod_days = 21\n")
            .unwrap()
            .with_base_url("https://library.example/api");
        assert_eq!(config.api.base_url, "https://library.example/api");
        assert_eq!(config.loans.period_days, 21);
    }

    #[test]
    fn test_rejects_zero_period_and_empty_url() {
        assert!(matches!(
            ConsoleConfig::from_toml("[loans]\nperiod_days = 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ConsoleConfig::from_toml("[api]\nbase_url = \"  \"\n"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ConsoleConfig::from_toml("[loans\nperiod_days = 7"),
            Err(ConfigError::Parse(_))
        ));
    }
}
