use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::BillingError;

/// Half-open calendar window used when projecting occurrences for list and
/// forecast views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, BillingError> {
        if end <= start {
            return Err(BillingError::InvalidWindow(
                "window end must be after start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}
