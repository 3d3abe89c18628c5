//! Behavioural scenarios for the transaction analyzer
//!
//! Each test mirrors a business case the bank relies on:
//! - Invalid input is rejected before any business rule
//! - Non-VIP limits (count, daily sum, large external withdrawals)
//! - Channel and weekend restrictions apply to VIP clients too
//! - Commission transfers are approved with a notice

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use transaction_analyzer::{
    analyze, AnalysisResult, Notice, RejectionReason, Transaction, TransactionKind,
    APPROVED_MESSAGE,
};

fn saturday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()
}

fn reason(tx: &Transaction) -> Option<RejectionReason> {
    analyze(tx).rejection_reason()
}

#[test]
fn test_rejects_unknown_transaction_type() {
    let tx = Transaction {
        amount: Decimal::from(100),
        kind: TransactionKind::Unknown,
        timestamp: Utc::now(),
        ..Default::default()
    };

    let result = analyze(&tx);
    assert_eq!(result.rejection_reason(), Some(RejectionReason::InvalidType));
    assert!(result.message().starts_with("Error"));
}

#[test]
fn test_rejects_zero_amount() {
    let tx = Transaction {
        amount: Decimal::ZERO,
        kind: TransactionKind::Deposit,
        channel: "Web".to_string(),
        timestamp: Utc::now(),
        ..Default::default()
    };

    let result = analyze(&tx);
    assert_eq!(result.rejection_reason(), Some(RejectionReason::InvalidAmount));
    assert!(result.message().starts_with("Error"));
}

#[test]
fn test_rejects_too_many_transactions_for_non_vip() {
    let tx = Transaction {
        amount: Decimal::from(100),
        kind: TransactionKind::Deposit,
        daily_transaction_count: 15,
        is_vip_client: false,
        ..Default::default()
    };

    assert_eq!(reason(&tx), Some(RejectionReason::CountLimitExceeded));
}

#[test]
fn test_vip_not_subject_to_count_limit() {
    let tx = Transaction {
        amount: Decimal::from(100),
        kind: TransactionKind::Deposit,
        daily_transaction_count: 15,
        is_vip_client: true,
        ..Default::default()
    };

    assert!(analyze(&tx).is_approved());
}

#[test]
fn test_allows_vip_large_external_transfer() {
    let tx = Transaction {
        amount: Decimal::from(2_000_000),
        kind: TransactionKind::Transfer,
        is_internal: false,
        is_vip_client: true,
        ..Default::default()
    };

    let result = analyze(&tx);
    assert_eq!(result, AnalysisResult::approved());
    assert_eq!(result.message(), APPROVED_MESSAGE);
}

#[test]
fn test_applies_commission_for_non_vip_current_to_savings() {
    let tx = Transaction {
        amount: Decimal::from(1000),
        kind: TransactionKind::Transfer,
        from_account_type: "current".to_string(),
        to_account_type: "savings".to_string(),
        is_internal: false,
        is_vip_client: false,
        ..Default::default()
    };

    let result = analyze(&tx);
    assert!(result.is_approved());
    assert_eq!(result.category(), "approved-with-notice");
    assert_eq!(
        result.notice(),
        Some(&Notice::Commission {
            fee: Decimal::from(10)
        })
    );
    assert!(result.message().starts_with("Commission"));
}

#[test]
fn test_vip_pays_no_commission() {
    let tx = Transaction {
        amount: Decimal::from(1000),
        kind: TransactionKind::Transfer,
        from_account_type: "current".to_string(),
        to_account_type: "savings".to_string(),
        is_vip_client: true,
        ..Default::default()
    };

    assert_eq!(analyze(&tx), AnalysisResult::approved());
}

#[test]
fn test_rejects_daily_sum_exceeded_for_non_vip() {
    let tx = Transaction {
        amount: Decimal::from(300_000),
        kind: TransactionKind::Transfer,
        daily_transaction_total: Decimal::from(250_000),
        is_vip_client: false,
        ..Default::default()
    };

    let result = analyze(&tx);
    assert_eq!(result.rejection_reason(), Some(RejectionReason::SumLimitExceeded));
    assert!(result.message().starts_with("Rejected"));
}

#[test]
fn test_rejects_large_atm_transfer() {
    let tx = Transaction {
        amount: Decimal::from(150_000),
        kind: TransactionKind::Transfer,
        channel: "ATM".to_string(),
        is_internal: true,
        ..Default::default()
    };

    assert_eq!(reason(&tx), Some(RejectionReason::SumLimitExceeded));
}

#[test]
fn test_atm_limit_applies_to_vip() {
    let tx = Transaction {
        amount: Decimal::from(150_000),
        kind: TransactionKind::Withdrawal,
        channel: "ATM".to_string(),
        is_internal: true,
        is_vip_client: true,
        ..Default::default()
    };

    assert_eq!(reason(&tx), Some(RejectionReason::SumLimitExceeded));
}

#[test]
fn test_allows_vip_large_external_withdrawal() {
    let tx = Transaction {
        amount: Decimal::from(500_000),
        kind: TransactionKind::Withdrawal,
        is_internal: false,
        is_vip_client: true,
        channel: "Office".to_string(),
        ..Default::default()
    };

    assert_eq!(analyze(&tx), AnalysisResult::approved());
}

#[test]
fn test_rejects_web_withdrawal() {
    for is_vip_client in [false, true] {
        let tx = Transaction {
            amount: Decimal::from(100),
            kind: TransactionKind::Withdrawal,
            channel: "Web".to_string(),
            is_vip_client,
            ..Default::default()
        };

        assert_eq!(reason(&tx), Some(RejectionReason::ChannelForbidden));
    }
}

#[test]
fn test_rejects_weekend_transfer_between_different_accounts() {
    let tx = Transaction {
        amount: Decimal::from(1000),
        kind: TransactionKind::Transfer,
        from_account_type: "Current".to_string(),
        to_account_type: "Savings".to_string(),
        is_internal: true,
        is_vip_client: true,
        channel: "Web".to_string(),
        timestamp: saturday(),
        daily_transaction_count: 1,
        daily_transaction_total: Decimal::from(1000),
    };

    assert_eq!(reason(&tx), Some(RejectionReason::WeekendRestricted));
}

#[test]
fn test_allows_weekend_transfer_between_same_accounts() {
    let tx = Transaction {
        amount: Decimal::from(1000),
        kind: TransactionKind::Transfer,
        from_account_type: "current".to_string(),
        to_account_type: "current".to_string(),
        channel: "Web".to_string(),
        timestamp: saturday(),
        ..Default::default()
    };

    assert_eq!(analyze(&tx), AnalysisResult::approved());
}

#[test]
fn test_weekday_transfer_between_different_accounts_allowed() {
    let tx = Transaction {
        amount: Decimal::from(1000),
        kind: TransactionKind::Transfer,
        from_account_type: "savings".to_string(),
        to_account_type: "current".to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap(),
        ..Default::default()
    };

    assert_eq!(analyze(&tx), AnalysisResult::approved());
}

#[test]
fn test_rejects_large_external_withdrawal_for_non_vip() {
    let tx = Transaction {
        amount: Decimal::from(250_000),
        kind: TransactionKind::Withdrawal,
        is_internal: false,
        is_vip_client: false,
        ..Default::default()
    };

    let result = analyze(&tx);
    assert_eq!(result.rejection_reason(), Some(RejectionReason::VipOnly));
    assert!(result.message().contains("VIP"));
}

#[test]
fn test_result_serializes_for_callers() {
    let tx: Transaction = serde_json::from_str(
        r#"{"amount": "250000", "kind": "withdrawal", "is_internal": false}"#,
    )
    .unwrap();

    let json = serde_json::to_value(analyze(&tx)).unwrap();
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["reason"], "vip-only");
}
