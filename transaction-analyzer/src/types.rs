//! Core types for the transaction analyzer

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Message returned for a plain approval
pub const APPROVED_MESSAGE: &str = "Transaction approved.";

/// Transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Cash or account deposit
    Deposit,
    /// Cash withdrawal
    Withdrawal,
    /// Transfer between accounts
    Transfer,
    /// Unrecognized or unset kind, always invalid
    #[default]
    Unknown,
}

impl From<&str> for TransactionKind {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "deposit" => TransactionKind::Deposit,
            "withdrawal" => TransactionKind::Withdrawal,
            "transfer" => TransactionKind::Transfer,
            _ => TransactionKind::Unknown,
        }
    }
}

// Unrecognized kinds are data, not a parse failure.
impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(TransactionKind::from(raw.as_str()))
    }
}

/// Transaction under review together with the client's daily aggregates
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount of this transaction
    pub amount: Decimal,

    /// Transaction kind
    pub kind: TransactionKind,

    /// Submission time, only its weekday matters
    #[serde(default)]
    pub timestamp: DateTime<Utc>,

    /// Source account category (e.g. "current")
    #[serde(default)]
    pub from_account_type: String,

    /// Destination account category (e.g. "savings")
    #[serde(default)]
    pub to_account_type: String,

    /// Source and destination belong to the same client relationship
    #[serde(default)]
    pub is_internal: bool,

    /// Client is VIP
    #[serde(default)]
    pub is_vip_client: bool,

    /// Origination channel ("ATM", "Web", "Office", ...)
    #[serde(default)]
    pub channel: String,

    /// Transactions already completed today, excluding this one
    #[serde(default)]
    pub daily_transaction_count: u32,

    /// Sum of transactions already completed today, excluding this one
    #[serde(default)]
    pub daily_transaction_total: Decimal,
}

/// Why a transaction was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionReason {
    /// Unknown transaction kind
    InvalidType,
    /// Zero or negative amount
    InvalidAmount,
    /// Daily transaction count reached
    CountLimitExceeded,
    /// Daily sum or ATM ceiling exceeded
    SumLimitExceeded,
    /// Operation not permitted through this channel
    ChannelForbidden,
    /// Operation reserved for VIP clients
    VipOnly,
    /// Operation not permitted on weekends
    WeekendRestricted,
}

impl RejectionReason {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::InvalidType => "invalid-type",
            RejectionReason::InvalidAmount => "invalid-amount",
            RejectionReason::CountLimitExceeded => "count-limit-exceeded",
            RejectionReason::SumLimitExceeded => "sum-limit-exceeded",
            RejectionReason::ChannelForbidden => "channel-forbidden",
            RejectionReason::VipOnly => "vip-only",
            RejectionReason::WeekendRestricted => "weekend-restricted",
        }
    }

    /// Human-readable rejection message
    pub fn message(&self) -> &'static str {
        match self {
            RejectionReason::InvalidType => "Error: unknown transaction type.",
            RejectionReason::InvalidAmount => "Error: transaction amount must be positive.",
            RejectionReason::CountLimitExceeded => {
                "Rejected: daily transaction count limit exceeded."
            }
            RejectionReason::SumLimitExceeded => "Rejected: transaction amount limit exceeded.",
            RejectionReason::ChannelForbidden => {
                "Rejected: cash withdrawal via the web channel is not allowed."
            }
            RejectionReason::VipOnly => {
                "Rejected: large external withdrawals are available to VIP clients only."
            }
            RejectionReason::WeekendRestricted => {
                "Rejected: transfers between different account types are not allowed on weekends."
            }
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Informational annotation attached to an approval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// A commission will be charged
    Commission {
        /// Fee amount
        fee: Decimal,
    },
}

impl Notice {
    /// Human-readable notice message
    pub fn message(&self) -> String {
        match self {
            Notice::Commission { fee } => format!(
                "Commission applies: a fee of {} will be charged. Transaction approved.",
                fee
            ),
        }
    }
}

/// Outcome of analyzing one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisResult {
    /// Transaction may proceed
    Approved {
        /// Approval message
        message: String,
    },

    /// Transaction may proceed, with an informational notice
    ApprovedWithNotice {
        /// Attached notice
        notice: Notice,
        /// Approval message
        message: String,
    },

    /// Transaction must not proceed
    Rejected {
        /// Rule category that rejected it
        reason: RejectionReason,
        /// Rejection message
        message: String,
    },
}

impl AnalysisResult {
    /// Plain approval
    pub fn approved() -> Self {
        AnalysisResult::Approved {
            message: APPROVED_MESSAGE.to_string(),
        }
    }

    /// Approval carrying a notice
    pub fn approved_with_notice(notice: Notice) -> Self {
        let message = notice.message();
        AnalysisResult::ApprovedWithNotice { notice, message }
    }

    /// Rejection for the given reason
    pub fn rejected(reason: RejectionReason) -> Self {
        AnalysisResult::Rejected {
            reason,
            message: reason.message().to_string(),
        }
    }

    /// Transaction may proceed (with or without notice)
    pub fn is_approved(&self) -> bool {
        !self.is_rejected()
    }

    /// Transaction must not proceed
    pub fn is_rejected(&self) -> bool {
        matches!(self, AnalysisResult::Rejected { .. })
    }

    /// Rejection reason, if rejected
    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            AnalysisResult::Rejected { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Attached notice, if any
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            AnalysisResult::ApprovedWithNotice { notice, .. } => Some(notice),
            _ => None,
        }
    }

    /// Message for display
    pub fn message(&self) -> &str {
        match self {
            AnalysisResult::Approved { message }
            | AnalysisResult::ApprovedWithNotice { message, .. }
            | AnalysisResult::Rejected { message, .. } => message,
        }
    }

    /// Outcome category
    pub fn category(&self) -> &'static str {
        match self {
            AnalysisResult::Approved { .. } => "approved",
            AnalysisResult::ApprovedWithNotice { .. } => "approved-with-notice",
            AnalysisResult::Rejected { .. } => "rejected",
        }
    }
}
