//! Limit configuration for transaction analysis

use crate::calendar::DEFAULT_WEEKEND;
use crate::{Error, Result};
use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordered pair of account categories (source -> destination)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPair {
    /// Source account category
    pub from: String,

    /// Destination account category
    pub to: String,
}

impl AccountPair {
    /// Create new account pair
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn matches(&self, from: &str, to: &str) -> bool {
        same_account_category(&self.from, from) && same_account_category(&self.to, to)
    }
}

/// Account categories are compared trimmed and case-insensitively
pub fn same_account_category(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Limit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Non-VIP transactions per day; reaching it rejects
    pub daily_count_limit: u32,

    /// Non-VIP daily sum including the current transaction
    pub daily_sum_limit: Decimal,

    /// Single internal ATM transaction ceiling
    pub atm_limit: Decimal,

    /// Single external withdrawal ceiling for non-VIP clients
    pub large_withdrawal_limit: Decimal,

    /// Commission charged on commission-bearing transfers (0.01 = 1%)
    pub commission_rate: Decimal,

    /// Transfers between these categories carry a commission
    pub commission_pairs: Vec<AccountPair>,

    /// Days on which cross-category transfers are blocked
    pub weekend_days: Vec<Weekday>,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            daily_count_limit: 10,
            daily_sum_limit: Decimal::from(500_000),
            atm_limit: Decimal::from(100_000),
            large_withdrawal_limit: Decimal::from(200_000),
            commission_rate: Decimal::new(1, 2), // 1%
            commission_pairs: vec![AccountPair::new("current", "savings")],
            weekend_days: DEFAULT_WEEKEND.to_vec(),
        }
    }
}

impl LimitConfig {
    /// Validate limits
    pub fn validate(&self) -> Result<()> {
        if self.daily_count_limit == 0 {
            return Err(Error::InvalidConfig(
                "daily_count_limit must be greater than zero".to_string(),
            ));
        }

        for (name, value) in [
            ("daily_sum_limit", self.daily_sum_limit),
            ("atm_limit", self.atm_limit),
            ("large_withdrawal_limit", self.large_withdrawal_limit),
        ] {
            if value <= Decimal::ZERO {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.commission_rate < Decimal::ZERO || self.commission_rate > Decimal::ONE {
            return Err(Error::InvalidConfig(format!(
                "commission_rate must be within [0, 1], got {}",
                self.commission_rate
            )));
        }

        Ok(())
    }

    /// Check if a transfer between these categories carries a commission
    pub fn is_commission_pair(&self, from: &str, to: &str) -> bool {
        self.commission_pairs.iter().any(|pair| pair.matches(from, to))
    }

    /// Commission fee for an amount, rounded to cents
    pub fn commission_for(&self, amount: Decimal) -> Decimal {
        amount
            .checked_mul(self.commission_rate)
            .map(|fee| fee.round_dp(2))
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_valid() {
        let limits = LimitConfig::default();
        assert!(limits.validate().is_ok());
        assert_eq!(limits.daily_count_limit, 10);
        assert_eq!(limits.weekend_days, vec![Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_invalid_limits() {
        let zero_count = LimitConfig {
            daily_count_limit: 0,
            ..LimitConfig::default()
        };
        assert!(zero_count.validate().is_err());

        let negative_atm = LimitConfig {
            atm_limit: Decimal::from(-1),
            ..LimitConfig::default()
        };
        assert!(negative_atm.validate().is_err());

        let huge_rate = LimitConfig {
            commission_rate: Decimal::from(2),
            ..LimitConfig::default()
        };
        assert!(huge_rate.validate().is_err());
    }

    #[test]
    fn test_commission_pair_matching() {
        let limits = LimitConfig::default();

        assert!(limits.is_commission_pair("current", "savings"));
        assert!(limits.is_commission_pair("Current ", "SAVINGS"));
        assert!(!limits.is_commission_pair("savings", "current"));
        assert!(!limits.is_commission_pair("current", "current"));
    }

    #[test]
    fn test_commission_fee() {
        let limits = LimitConfig::default();

        assert_eq!(limits.commission_for(Decimal::from(1000)), Decimal::from(10));
        assert_eq!(
            limits.commission_for(Decimal::new(12_345, 2)),
            Decimal::new(123, 2)
        );
        // overflow yields no fee rather than a panic
        let greedy = LimitConfig {
            commission_rate: Decimal::MAX,
            ..LimitConfig::default()
        };
        assert_eq!(greedy.commission_for(Decimal::MAX), Decimal::ZERO);
    }

    #[test]
    fn test_limits_from_toml() {
        let limits: LimitConfig = toml::from_str(
            r#"
            daily_count_limit = 15
            weekend_days = ["Fri", "Sat"]
            "#,
        )
        .unwrap();

        assert_eq!(limits.daily_count_limit, 15);
        assert_eq!(limits.weekend_days, vec![Weekday::Fri, Weekday::Sat]);
        assert_eq!(limits.atm_limit, Decimal::from(100_000));
    }
}
