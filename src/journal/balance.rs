use serde::{Deserialize, Serialize};

use super::entry::LedgerLine;

/// Largest debit/credit mismatch still considered balanced. Two decimal
/// places is the working currency precision; the tolerance also absorbs
/// floating-point summation error.
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// Figures needed to render the balance footer of a journal entry form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BalanceSummary {
    pub total_debits: f64,
    pub total_credits: f64,
    pub difference: f64,
    pub is_balanced: bool,
}

/// Sums the debit and credit columns of `lines` and reports whether they net
/// to zero within [`BALANCE_TOLERANCE`]. Negative amounts contribute
/// nothing to either column; malformed lines are tolerated rather than
/// rejected, and presentation-layer validation decides what to do with an
/// unbalanced entry.
pub fn summarize(lines: &[LedgerLine]) -> BalanceSummary {
    let mut total_debits = 0.0;
    let mut total_credits = 0.0;
    for line in lines {
        total_debits += line.debit.max(0.0);
        total_credits += line.credit.max(0.0);
    }
    let difference = (total_debits - total_credits).abs();
    BalanceSummary {
        total_debits,
        total_credits,
        difference,
        is_balanced: difference < BALANCE_TOLERANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn line(debit: f64, credit: f64) -> LedgerLine {
        LedgerLine {
            account_id: Uuid::new_v4(),
            description: String::new(),
            debit,
            credit,
        }
    }

    #[test]
    fn empty_entry_is_balanced() {
        let summary = summarize(&[]);
        assert!(summary.is_balanced);
        assert_eq!(summary.total_debits, 0.0);
        assert_eq!(summary.total_credits, 0.0);
    }

    #[test]
    fn negative_amounts_contribute_nothing() {
        let summary = summarize(&[line(-50.0, 0.0), line(0.0, -25.0)]);
        assert_eq!(summary.total_debits, 0.0);
        assert_eq!(summary.total_credits, 0.0);
        assert!(summary.is_balanced);
    }

    #[test]
    fn tolerance_boundary() {
        let within = summarize(&[line(100.0, 0.0), line(0.0, 99.995)]);
        assert!(within.is_balanced);

        let outside = summarize(&[line(100.0, 0.0), line(0.0, 99.98)]);
        assert!(!outside.is_balanced);
        assert!((outside.difference - 0.02).abs() < 1e-9);
    }
}
