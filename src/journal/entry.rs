use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::balance::{summarize, BalanceSummary};

/// Single debit or credit posting against a chart-of-accounts entry.
///
/// The account reference is opaque here; whether it points at a real account
/// is the caller's responsibility. A well-formed line carries exactly one of
/// `debit`/`credit` non-zero, but the balance check tolerates anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerLine {
    pub account_id: Uuid,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub credit: f64,
}

impl LedgerLine {
    pub fn debit(account_id: Uuid, description: impl Into<String>, amount: f64) -> Self {
        Self {
            account_id,
            description: description.into(),
            debit: amount,
            credit: 0.0,
        }
    }

    pub fn credit(account_id: Uuid, description: impl Into<String>, amount: f64) -> Self {
        Self {
            account_id,
            description: description.into(),
            debit: 0.0,
            credit: amount,
        }
    }
}

/// Double-entry bookkeeping record assembled by a form and validated before
/// submission. Line order is preserved for display and has no effect on the
/// balance computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default)]
    pub lines: Vec<LedgerLine>,
}

impl JournalEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            memo: None,
            lines: Vec::new(),
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn with_line(mut self, line: LedgerLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn add_line(&mut self, line: LedgerLine) {
        self.lines.push(line);
    }

    pub fn summary(&self) -> BalanceSummary {
        summarize(&self.lines)
    }

    pub fn is_balanced(&self) -> bool {
        self.summary().is_balanced
    }
}
