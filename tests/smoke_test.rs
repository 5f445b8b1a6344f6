use billing_core::{
    forms::{JournalEntryDraft, LineDraft, RecurrenceDraft},
    init,
    schedule::next_occurrence,
};
use chrono::NaiveDate;
use uuid::Uuid;

#[test]
fn recurring_invoice_smoke() {
    init();

    let payload = r#"{
        "frequency": "monthly",
        "interval": 1,
        "start_date": "2024-01-15",
        "day_of_month": 15
    }"#;
    let rule = RecurrenceDraft::from_json(payload)
        .expect("payload parses")
        .parse()
        .expect("draft converts");

    let today = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
    assert_eq!(
        next_occurrence(&rule, today),
        Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    );
}

#[test]
fn journal_entry_smoke() {
    init();

    let expense = Uuid::new_v4().to_string();
    let cash = Uuid::new_v4().to_string();

    // Half-entered form: the live preview is unbalanced.
    let draft = JournalEntryDraft::new("2024-06-01")
        .with_line(LineDraft::new(&expense).with_debit("250"));
    assert!(!draft.balance_preview().is_balanced);

    // Completing the credit side balances it, and the parsed entry agrees.
    let draft = draft.with_line(LineDraft::new(&cash).with_credit("250"));
    assert!(draft.balance_preview().is_balanced);

    let entry = draft.parse().expect("draft converts");
    assert!(entry.is_balanced());
    assert_eq!(entry.lines.len(), 2);
}
