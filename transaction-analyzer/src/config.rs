//! Configuration for the transaction analyzer

use crate::limits::LimitConfig;
use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Rule limits
    pub limits: LimitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "transaction-analyzer".to_string(),
            limits: LimitConfig::default(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Some(limit) = env_value::<u32>("ANALYZER_DAILY_COUNT_LIMIT")? {
            config.limits.daily_count_limit = limit;
        }

        if let Some(limit) = env_value::<Decimal>("ANALYZER_DAILY_SUM_LIMIT")? {
            config.limits.daily_sum_limit = limit;
        }

        if let Some(limit) = env_value::<Decimal>("ANALYZER_ATM_LIMIT")? {
            config.limits.atm_limit = limit;
        }

        if let Some(limit) = env_value::<Decimal>("ANALYZER_LARGE_WITHDRAWAL_LIMIT")? {
            config.limits.large_withdrawal_limit = limit;
        }

        if let Some(rate) = env_value::<Decimal>("ANALYZER_COMMISSION_RATE")? {
            config.limits.commission_rate = rate;
        }

        Ok(config)
    }

    /// Load from `ANALYZER_CONFIG` if set, otherwise from the environment
    pub fn load() -> Result<Self> {
        let config = match std::env::var("ANALYZER_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()
    }
}

fn env_value<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid {}={:?}: {}", key, raw, e))),
        Err(_) => Ok(None),
    }
}
