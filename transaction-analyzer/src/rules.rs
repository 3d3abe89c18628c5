//! Ordered rule table
//!
//! Each rule pairs a predicate with the outcome it produces. Rules are
//! evaluated top to bottom and the first one that applies decides.
//! Validity checks come first, then VIP-exempt limits, then channel and
//! calendar restrictions. The commission rule is last and never rejects.

use crate::calendar::is_weekend;
use crate::limits::{same_account_category, LimitConfig};
use crate::types::{RejectionReason, Transaction, TransactionKind};
use rust_decimal::Decimal;
use std::fmt;

/// ATM channel label
pub const CHANNEL_ATM: &str = "ATM";

/// Web channel label
pub const CHANNEL_WEB: &str = "Web";

/// Rule identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// Kind is unknown
    UnknownKind,
    /// Amount is zero or negative
    NonPositiveAmount,
    /// Non-VIP daily count reached
    DailyCountLimit,
    /// Non-VIP daily sum exceeded
    DailySumLimit,
    /// Internal ATM ceiling exceeded
    AtmLimit,
    /// Withdrawal through the web channel
    WebWithdrawal,
    /// Large external withdrawal by a non-VIP client
    LargeExternalWithdrawal,
    /// Weekend transfer between different account categories
    WeekendCrossAccountTransfer,
    /// Non-VIP transfer between commission-bearing categories
    TransferCommission,
}

impl RuleId {
    /// Rule name for logs and audit output
    pub fn name(&self) -> &'static str {
        match self {
            RuleId::UnknownKind => "unknown_kind",
            RuleId::NonPositiveAmount => "non_positive_amount",
            RuleId::DailyCountLimit => "daily_count_limit",
            RuleId::DailySumLimit => "daily_sum_limit",
            RuleId::AtmLimit => "atm_limit",
            RuleId::WebWithdrawal => "web_withdrawal",
            RuleId::LargeExternalWithdrawal => "large_external_withdrawal",
            RuleId::WeekendCrossAccountTransfer => "weekend_cross_account_transfer",
            RuleId::TransferCommission => "transfer_commission",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a matching rule produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reject with the given reason
    Reject(RejectionReason),
    /// Approve with a commission notice
    Commission,
}

/// Single rule: predicate plus outcome
pub struct Rule {
    /// Identifier
    pub id: RuleId,

    /// Outcome when the predicate holds
    pub outcome: Outcome,

    predicate: fn(&Transaction, &LimitConfig) -> bool,
}

impl Rule {
    /// Check if the rule applies to the transaction
    pub fn applies(&self, tx: &Transaction, limits: &LimitConfig) -> bool {
        (self.predicate)(tx, limits)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("outcome", &self.outcome)
            .finish()
    }
}

/// All rules in evaluation order
pub static RULES: [Rule; 9] = [
    Rule {
        id: RuleId::UnknownKind,
        outcome: Outcome::Reject(RejectionReason::InvalidType),
        predicate: unknown_kind,
    },
    Rule {
        id: RuleId::NonPositiveAmount,
        outcome: Outcome::Reject(RejectionReason::InvalidAmount),
        predicate: non_positive_amount,
    },
    Rule {
        id: RuleId::DailyCountLimit,
        outcome: Outcome::Reject(RejectionReason::CountLimitExceeded),
        predicate: daily_count_reached,
    },
    Rule {
        id: RuleId::DailySumLimit,
        outcome: Outcome::Reject(RejectionReason::SumLimitExceeded),
        predicate: daily_sum_exceeded,
    },
    Rule {
        id: RuleId::AtmLimit,
        outcome: Outcome::Reject(RejectionReason::SumLimitExceeded),
        predicate: atm_limit_exceeded,
    },
    Rule {
        id: RuleId::WebWithdrawal,
        outcome: Outcome::Reject(RejectionReason::ChannelForbidden),
        predicate: web_withdrawal,
    },
    Rule {
        id: RuleId::LargeExternalWithdrawal,
        outcome: Outcome::Reject(RejectionReason::VipOnly),
        predicate: large_external_withdrawal,
    },
    Rule {
        id: RuleId::WeekendCrossAccountTransfer,
        outcome: Outcome::Reject(RejectionReason::WeekendRestricted),
        predicate: weekend_cross_account_transfer,
    },
    Rule {
        id: RuleId::TransferCommission,
        outcome: Outcome::Commission,
        predicate: commission_transfer,
    },
];

fn unknown_kind(tx: &Transaction, _limits: &LimitConfig) -> bool {
    tx.kind == TransactionKind::Unknown
}

fn non_positive_amount(tx: &Transaction, _limits: &LimitConfig) -> bool {
    tx.amount <= Decimal::ZERO
}

fn daily_count_reached(tx: &Transaction, limits: &LimitConfig) -> bool {
    !tx.is_vip_client && tx.daily_transaction_count >= limits.daily_count_limit
}

fn daily_sum_exceeded(tx: &Transaction, limits: &LimitConfig) -> bool {
    if tx.is_vip_client {
        return false;
    }
    // A total too large to represent is over any limit
    match tx.daily_transaction_total.checked_add(tx.amount) {
        Some(total) => total > limits.daily_sum_limit,
        None => true,
    }
}

fn atm_limit_exceeded(tx: &Transaction, limits: &LimitConfig) -> bool {
    is_channel(tx, CHANNEL_ATM) && tx.is_internal && tx.amount > limits.atm_limit
}

fn web_withdrawal(tx: &Transaction, _limits: &LimitConfig) -> bool {
    is_channel(tx, CHANNEL_WEB) && tx.kind == TransactionKind::Withdrawal
}

fn large_external_withdrawal(tx: &Transaction, limits: &LimitConfig) -> bool {
    tx.kind == TransactionKind::Withdrawal
        && !tx.is_internal
        && tx.amount > limits.large_withdrawal_limit
        && !tx.is_vip_client
}

fn weekend_cross_account_transfer(tx: &Transaction, limits: &LimitConfig) -> bool {
    tx.kind == TransactionKind::Transfer
        && is_weekend(&tx.timestamp, &limits.weekend_days)
        && !same_account_category(&tx.from_account_type, &tx.to_account_type)
}

fn commission_transfer(tx: &Transaction, limits: &LimitConfig) -> bool {
    tx.kind == TransactionKind::Transfer
        && !tx.is_vip_client
        && limits.is_commission_pair(&tx.from_account_type, &tx.to_account_type)
}

fn is_channel(tx: &Transaction, channel: &str) -> bool {
    tx.channel.trim().eq_ignore_ascii_case(channel)
}
