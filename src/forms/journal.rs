use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::parse_form_date;
use crate::errors::{BillingError, BillingResult};
use crate::journal::{summarize, BalanceSummary, JournalEntry, LedgerLine};

/// One row of the journal entry form: an account picker value plus debit and
/// credit amount fields still in string form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LineDraft {
    pub account_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub debit: String,
    #[serde(default)]
    pub credit: String,
}

impl LineDraft {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_debit(mut self, debit: impl Into<String>) -> Self {
        self.debit = debit.into();
        self
    }

    pub fn with_credit(mut self, credit: impl Into<String>) -> Self {
        self.credit = credit.into();
        self
    }
}

/// Journal entry form state. Rows keep their insertion order; every update
/// function returns the new draft value and leaves the caller's copy alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JournalEntryDraft {
    pub date: String,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub lines: Vec<LineDraft>,
}

impl JournalEntryDraft {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_line(mut self, line: LineDraft) -> Self {
        self.lines.push(line);
        self
    }

    /// Replaces the row at `index`; an out-of-range index leaves the draft
    /// unchanged.
    pub fn update_line(mut self, index: usize, line: LineDraft) -> Self {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = line;
        }
        self
    }

    /// Removes the row at `index`; an out-of-range index leaves the draft
    /// unchanged.
    pub fn remove_line(mut self, index: usize) -> Self {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
        self
    }

    pub fn from_json(payload: &str) -> BillingResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn to_json(&self) -> BillingResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Live balance figures for the form footer while the user is still
    /// typing: amounts that do not parse yet count as zero, and account
    /// references are not checked.
    pub fn balance_preview(&self) -> BalanceSummary {
        let lines: Vec<LedgerLine> = self
            .lines
            .iter()
            .map(|draft| LedgerLine {
                account_id: Uuid::nil(),
                description: draft.description.clone(),
                debit: lenient_amount(&draft.debit),
                credit: lenient_amount(&draft.credit),
            })
            .collect();
        summarize(&lines)
    }

    /// Converts the draft into a [`JournalEntry`] ready for the balance
    /// check and submission.
    pub fn parse(&self) -> BillingResult<JournalEntry> {
        let date = parse_form_date("date", &self.date)?;
        let mut entry = JournalEntry::new(date);
        if !self.memo.trim().is_empty() {
            entry.memo = Some(self.memo.trim().to_string());
        }
        for draft in &self.lines {
            let account_id = Uuid::parse_str(draft.account_id.trim())
                .map_err(|_| BillingError::InvalidAccount(draft.account_id.clone()))?;
            entry.add_line(LedgerLine {
                account_id,
                description: draft.description.clone(),
                debit: parse_amount("debit", &draft.debit)?,
                credit: parse_amount("credit", &draft.credit)?,
            });
        }
        Ok(entry)
    }
}

/// Strict amount parsing for submission; an untouched (empty) field is zero.
fn parse_amount(field: &'static str, value: &str) -> BillingResult<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| BillingError::InvalidAmount {
            field,
            value: value.to_string(),
        })
}

fn lenient_amount(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}
