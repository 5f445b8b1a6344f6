//! Immutable draft types mirroring the string-typed form state a UI or REST
//! payload carries. Each draft exposes pure `with_*` update functions that
//! return the updated value, plus a `parse` step producing the typed domain
//! object or a [`crate::errors::BillingError`].

pub mod journal;
pub mod recurrence;

pub use journal::{JournalEntryDraft, LineDraft};
pub use recurrence::RecurrenceDraft;

use chrono::NaiveDate;

use crate::errors::BillingError;

/// Parses a `YYYY-MM-DD` form field. A trailing time component (`T…` or
/// `" …"`) is dropped so datetime strings normalize to midnight.
pub(crate) fn parse_form_date(field: &'static str, value: &str) -> Result<NaiveDate, BillingError> {
    let trimmed = value.trim();
    let date_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| BillingError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_parsing_truncates_time_components() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_form_date("start_date", "2024-01-15").unwrap(), expected);
        assert_eq!(
            parse_form_date("start_date", "2024-01-15T09:30:00Z").unwrap(),
            expected
        );
        assert_eq!(
            parse_form_date("start_date", "2024-01-15 09:30:00").unwrap(),
            expected
        );
    }

    #[test]
    fn date_parsing_reports_the_offending_field() {
        let err = parse_form_date("end_date", "not-a-date").unwrap_err();
        assert!(matches!(
            err,
            BillingError::InvalidDate {
                field: "end_date",
                ..
            }
        ));
    }
}
