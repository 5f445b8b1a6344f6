//! Recurrence rules and the next-occurrence calculator behind recurring
//! invoices.

pub mod rule;
pub mod scheduler;
pub mod window;

pub use rule::{Frequency, RecurrenceRule};
pub use scheduler::{next_occurrence, occurrences_between, MAX_SCHEDULE_STEPS};
pub use window::DateWindow;
