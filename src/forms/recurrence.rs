use serde::{Deserialize, Serialize};

use super::parse_form_date;
use crate::errors::{BillingError, BillingResult};
use crate::schedule::{Frequency, RecurrenceRule};

/// Recurrence form state exactly as the schedule editor submits it: the
/// frequency dropdown value and dates still in string form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurrenceDraft {
    pub frequency: String,
    #[serde(default = "RecurrenceRule::default_interval")]
    pub interval: u32,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<i32>,
    #[serde(default)]
    pub business_days_only: bool,
}

impl Default for RecurrenceDraft {
    fn default() -> Self {
        Self {
            frequency: "monthly".into(),
            interval: 1,
            start_date: String::new(),
            end_date: None,
            day_of_week: None,
            day_of_month: None,
            business_days_only: false,
        }
    }
}

impl RecurrenceDraft {
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = start_date.into();
        self
    }

    pub fn with_end_date(mut self, end_date: Option<String>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn with_day_of_week(mut self, day_of_week: Option<i32>) -> Self {
        self.day_of_week = day_of_week;
        self
    }

    pub fn with_day_of_month(mut self, day_of_month: Option<i32>) -> Self {
        self.day_of_month = day_of_month;
        self
    }

    pub fn with_business_days_only(mut self, business_days_only: bool) -> Self {
        self.business_days_only = business_days_only;
        self
    }

    pub fn from_json(payload: &str) -> BillingResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn to_json(&self) -> BillingResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Converts the draft into a validated [`RecurrenceRule`].
    ///
    /// An unrecognized frequency value degrades to a daily schedule with
    /// interval 1 rather than failing, matching how the schedule editor
    /// treats stale dropdown values.
    pub fn parse(&self) -> BillingResult<RecurrenceRule> {
        let start_date = parse_form_date("start_date", &self.start_date)?;

        let (frequency, interval) = match self.frequency.trim().to_ascii_lowercase().as_str() {
            "daily" => (Frequency::Daily, self.interval),
            "weekly" => (Frequency::Weekly, self.interval),
            "monthly" => (Frequency::Monthly, self.interval),
            "quarterly" => (Frequency::Quarterly, self.interval),
            "yearly" | "annually" => (Frequency::Yearly, self.interval),
            other => {
                tracing::debug!(frequency = other, "unrecognized frequency, using daily");
                (Frequency::Daily, 1)
            }
        };

        let end_date = match self.end_date.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(parse_form_date("end_date", raw)?),
            _ => None,
        };

        let day_of_week = self
            .day_of_week
            .map(|day| {
                if (0..=6).contains(&day) {
                    Ok(day as u8)
                } else {
                    Err(BillingError::OutOfRange {
                        field: "day_of_week",
                        value: i64::from(day),
                        min: 0,
                        max: 6,
                    })
                }
            })
            .transpose()?;

        let day_of_month = self
            .day_of_month
            .map(|day| {
                if (1..=31).contains(&day) {
                    Ok(day as u32)
                } else {
                    Err(BillingError::OutOfRange {
                        field: "day_of_month",
                        value: i64::from(day),
                        min: 1,
                        max: 31,
                    })
                }
            })
            .transpose()?;

        let rule = RecurrenceRule {
            frequency,
            interval,
            start_date,
            end_date,
            day_of_week,
            day_of_month,
            business_days_only: self.business_days_only,
        };
        rule.validate()?;
        Ok(rule)
    }
}
