//! API configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use domain_inventory::fees::DEFAULT_MINIMUM_FEE;
use domain_inventory::tax::DEFAULT_TAX_RATE;
use domain_inventory::EngineSettings;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Fixed minimum professional fee
    pub minimum_fee: Decimal,
    /// Transfer-tax rate for jurisdictions missing from the table
    pub default_tax_rate: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            minimum_fee: DEFAULT_MINIMUM_FEE,
            default_tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Variables that are not set keep their default value.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("minimum_fee", defaults.minimum_fee.to_string())?
            .set_default("default_tax_rate", defaults.default_tax_rate.to_string())?
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Engine parameters derived from this configuration
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            minimum_fee: self.minimum_fee,
            default_tax_rate: self.default_tax_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_engine_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.engine_settings(), EngineSettings::default());
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }
}
