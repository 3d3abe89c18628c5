//! Transaction Analyzer
//!
//! Rule-based approval of single banking transactions against the
//! client's daily activity.
//!
//! # Pipeline
//!
//! - **Validity**: unknown kinds and non-positive amounts are rejected first
//! - **Limits**: daily count, daily sum, ATM and large-withdrawal ceilings
//! - **Channel / calendar**: web withdrawals, weekend cross-account transfers
//! - **Commission**: approval annotated with a fee for selected transfers
//!
//! The first matching rule decides. Analysis is pure: no I/O, no shared state.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod analyzer;
pub mod calendar;
pub mod config;
pub mod error;
pub mod limits;
pub mod rules;
pub mod stream;
pub mod types;

pub use analyzer::{analyze, TransactionAnalyzer};
pub use config::Config;
pub use error::{Error, Result};
pub use limits::{AccountPair, LimitConfig};
pub use rules::{Outcome, Rule, RuleId, RULES};
pub use stream::{analyze_lines, LineError, StreamSummary};
pub use types::*;
