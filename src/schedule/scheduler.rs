use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::rule::{Frequency, RecurrenceRule};
use super::window::DateWindow;

/// Upper bound on advancement steps for a single scheduling query. Any
/// realistic invoice schedule resolves well within 500 daily-granularity
/// steps; a rule that is still behind `today` after that many is treated as
/// exhausted rather than looping further.
pub const MAX_SCHEDULE_STEPS: usize = 500;

/// Computes the next occurrence of `rule` strictly after `today`.
///
/// Returns `None` when the schedule is exhausted by its end date or when the
/// advancement cap is reached; callers treat both as "no upcoming
/// occurrence." This never panics on malformed rules.
pub fn next_occurrence(rule: &RecurrenceRule, today: NaiveDate) -> Option<NaiveDate> {
    let mut next = rule.start_date;

    // Schedule has not started yet: the first occurrence is the start itself,
    // unless the rule is already exhausted.
    if next > today {
        return match rule.end_date {
            Some(end) if next > end => None,
            _ => Some(next),
        };
    }

    let mut steps = 0usize;
    while steps < MAX_SCHEDULE_STEPS {
        next = advance(rule, next);
        if let Some(end) = rule.end_date {
            if next > end {
                return None;
            }
        }
        if next > today {
            return Some(next);
        }
        steps += 1;
    }
    tracing::warn!(
        cap = MAX_SCHEDULE_STEPS,
        start = %rule.start_date,
        "advancement cap reached before passing the reference date; treating schedule as exhausted"
    );
    None
}

/// Projects every occurrence of `rule` that falls inside `window`, in
/// ascending order. Projection stops at the rule's end date, at the
/// advancement cap, or as soon as the cursor leaves the window.
pub fn occurrences_between(rule: &RecurrenceRule, window: &DateWindow) -> Vec<NaiveDate> {
    let mut occurrences = Vec::new();
    let mut cursor = rule.start_date;
    let mut steps = 0usize;

    while steps < MAX_SCHEDULE_STEPS && cursor < window.end {
        if let Some(end) = rule.end_date {
            if cursor > end {
                break;
            }
        }
        if window.contains(cursor) {
            occurrences.push(cursor);
        }
        let advanced = advance(rule, cursor);
        if advanced <= cursor {
            // Malformed rule that no longer moves forward; nothing further
            // can be projected.
            break;
        }
        cursor = advanced;
        steps += 1;
    }

    occurrences
}

/// Advances the cursor by one schedule step.
fn advance(rule: &RecurrenceRule, from: NaiveDate) -> NaiveDate {
    match rule.frequency {
        Frequency::Daily => {
            if rule.business_days_only {
                advance_business_days(from, rule.interval)
            } else {
                from + Duration::days(i64::from(rule.interval))
            }
        }
        Frequency::Weekly => advance_weekly(from, rule.interval, rule.day_of_week),
        Frequency::Monthly => advance_months(from, rule.interval as i32, rule.day_of_month),
        Frequency::Quarterly => advance_months(from, rule.interval as i32 * 3, rule.day_of_month),
        Frequency::Yearly => advance_months(from, rule.interval as i32 * 12, rule.day_of_month),
    }
}

/// Walks forward one calendar day at a time, counting only Monday–Friday
/// toward `count`. The returned date always lands on a business day.
fn advance_business_days(from: NaiveDate, count: u32) -> NaiveDate {
    let mut date = from;
    let mut remaining = count;
    while remaining > 0 {
        date += Duration::days(1);
        if is_business_day(date) {
            remaining -= 1;
        }
    }
    date
}

fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Moves to the next occurrence of the anchor weekday (always at least one
/// day ahead), then adds the remaining whole weeks. Without an anchor the
/// step is a flat `interval` weeks.
fn advance_weekly(from: NaiveDate, interval: u32, day_of_week: Option<u8>) -> NaiveDate {
    match day_of_week {
        Some(target) => {
            let current = from.weekday().num_days_from_sunday();
            let mut delta = (u32::from(target) + 7 - current) % 7;
            if delta == 0 {
                delta = 7;
            }
            from + Duration::days(i64::from(delta))
                + Duration::weeks(i64::from(interval.saturating_sub(1)))
        }
        None => from + Duration::weeks(i64::from(interval)),
    }
}

/// Adds `months` calendar months, anchoring on `preferred_day` when set and
/// otherwise on the cursor's current day, clamped to the target month's real
/// length (Jan 31 + 1 month lands on Feb 28/29).
fn advance_months(from: NaiveDate, months: i32, preferred_day: Option<u32>) -> NaiveDate {
    let mut year = from.year();
    let mut month = from.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = preferred_day
        .unwrap_or_else(|| from.day())
        .clamp(1, days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(from)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first| (first - Duration::days(1)).day())
        .unwrap_or(28)
}
