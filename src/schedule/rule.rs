use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::BillingError;

/// How often a schedule repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
        }
    }
}

/// Declarative description of how a recurring invoice repeats.
///
/// `day_of_week` uses 0 = Sunday through 6 = Saturday and only participates
/// in weekly schedules; `day_of_month` anchors monthly, quarterly, and
/// yearly schedules and is clamped to the target month's real length during
/// advancement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    #[serde(default = "RecurrenceRule::default_interval")]
    pub interval: u32,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(default)]
    pub business_days_only: bool,
}

impl RecurrenceRule {
    pub fn new(frequency: Frequency, start_date: NaiveDate) -> Self {
        Self {
            frequency,
            interval: 1,
            start_date,
            end_date: None,
            day_of_week: None,
            day_of_month: None,
            business_days_only: false,
        }
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn on_weekday(mut self, day_of_week: u8) -> Self {
        self.day_of_week = Some(day_of_week);
        self
    }

    pub fn on_day_of_month(mut self, day_of_month: u32) -> Self {
        self.day_of_month = Some(day_of_month);
        self
    }

    pub fn business_days_only(mut self) -> Self {
        self.business_days_only = true;
        self
    }

    /// Checks the structural invariants of the rule.
    pub fn validate(&self) -> Result<(), BillingError> {
        if self.interval < 1 {
            return Err(BillingError::OutOfRange {
                field: "interval",
                value: i64::from(self.interval),
                min: 1,
                max: i64::from(u32::MAX),
            });
        }
        if let Some(day) = self.day_of_week {
            if day > 6 {
                return Err(BillingError::OutOfRange {
                    field: "day_of_week",
                    value: i64::from(day),
                    min: 0,
                    max: 6,
                });
            }
        }
        if let Some(day) = self.day_of_month {
            if !(1..=31).contains(&day) {
                return Err(BillingError::OutOfRange {
                    field: "day_of_month",
                    value: i64::from(day),
                    min: 1,
                    max: 31,
                });
            }
        }
        Ok(())
    }

    pub fn default_interval() -> u32 {
        1
    }
}
