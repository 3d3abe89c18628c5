//! Transaction analysis

use crate::limits::LimitConfig;
use crate::rules::{Outcome, RuleId, RULES};
use crate::types::{AnalysisResult, Notice, Transaction};
use std::sync::OnceLock;
use tracing::{debug, trace};

static DEFAULT_ANALYZER: OnceLock<TransactionAnalyzer> = OnceLock::new();

/// Analyze a transaction against the default limits
pub fn analyze(transaction: &Transaction) -> AnalysisResult {
    DEFAULT_ANALYZER
        .get_or_init(TransactionAnalyzer::default)
        .analyze(transaction)
}

/// Transaction analyzer
///
/// Holds only its limits, so a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TransactionAnalyzer {
    limits: LimitConfig,
}

impl TransactionAnalyzer {
    /// Create new analyzer
    pub fn new(limits: LimitConfig) -> Self {
        Self { limits }
    }

    /// Active limits
    pub fn limits(&self) -> &LimitConfig {
        &self.limits
    }

    /// Analyze a transaction; the first matching rule decides
    pub fn analyze(&self, tx: &Transaction) -> AnalysisResult {
        for rule in RULES.iter() {
            if !rule.applies(tx, &self.limits) {
                continue;
            }

            let result = match rule.outcome {
                Outcome::Reject(reason) => AnalysisResult::rejected(reason),
                Outcome::Commission => AnalysisResult::approved_with_notice(Notice::Commission {
                    fee: self.limits.commission_for(tx.amount),
                }),
            };

            debug!(
                rule = rule.id.name(),
                outcome = result.category(),
                kind = ?tx.kind,
                amount = %tx.amount,
                "Transaction rule matched"
            );
            return result;
        }

        trace!(kind = ?tx.kind, amount = %tx.amount, "No rule matched, approving");
        AnalysisResult::approved()
    }

    /// Every rule that applies, in evaluation order
    ///
    /// Unlike [`analyze`](Self::analyze) this does not stop at the first
    /// match; the first entry is the rule that decides the outcome.
    pub fn matching_rules(&self, tx: &Transaction) -> Vec<RuleId> {
        RULES
            .iter()
            .filter(|rule| rule.applies(tx, &self.limits))
            .map(|rule| rule.id)
            .collect()
    }

    /// Analyze several transactions independently
    pub fn analyze_batch(&self, transactions: &[Transaction]) -> Vec<AnalysisResult> {
        transactions.iter().map(|tx| self.analyze(tx)).collect()
    }
}
