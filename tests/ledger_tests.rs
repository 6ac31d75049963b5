use rattendance::core::calendar_view::summary_line;
use rattendance::{
    AttendanceBook, DEFAULT_STORAGE_KEY, DayKey, KeyValueStore, Ledger, MemoryStore, MonthKey,
    PaidLeaveScope, Record, UpsertOutcome, minutes_to_hours_and_minutes,
};

fn day(s: &str) -> DayKey {
    s.parse().expect("valid day key")
}

#[test]
fn test_upsert_non_empty_then_get() {
    let mut ledger = Ledger::new();
    let r = Record::new(90, 0, false);

    assert_eq!(ledger.upsert(day("2025-03-05"), r), UpsertOutcome::Stored);
    assert_eq!(ledger.get(&day("2025-03-05")), Some(&r));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_upsert_empty_removes_key() {
    let mut ledger = Ledger::new();
    ledger.upsert(day("2025-03-05"), Record::new(30, 0, false));

    let outcome = ledger.upsert(day("2025-03-05"), Record::default());
    assert_eq!(outcome, UpsertOutcome::Removed);
    assert!(!ledger.contains(&day("2025-03-05")));
    assert!(ledger.is_empty());
}

#[test]
fn test_upsert_empty_on_absent_key_is_noop() {
    let mut ledger = Ledger::new();
    ledger.upsert(day("2025-03-01"), Record::new(0, 0, true));
    let before = ledger.clone();

    ledger.upsert(day("2025-03-02"), Record::default());
    assert_eq!(ledger, before);
}

#[test]
fn test_upsert_replaces_previous_record() {
    let mut ledger = Ledger::new();
    ledger.upsert(day("2025-03-05"), Record::new(30, 0, false));
    ledger.upsert(day("2025-03-05"), Record::new(0, 0, true));

    assert_eq!(ledger.get(&day("2025-03-05")), Some(&Record::new(0, 0, true)));
}

#[test]
fn test_minutes_to_hours_and_minutes() {
    assert_eq!(minutes_to_hours_and_minutes(0), (0, 0));
    assert_eq!(minutes_to_hours_and_minutes(59), (0, 59));
    assert_eq!(minutes_to_hours_and_minutes(60), (1, 0));
    assert_eq!(minutes_to_hours_and_minutes(125), (2, 5));

    for t in [1u32, 61, 479, 1441, 100_000] {
        let (h, m) = minutes_to_hours_and_minutes(t);
        assert_eq!(h * 60 + m, t);
        assert!(m < 60);
    }
}

#[test]
fn test_aggregate_month_counts_only_that_month() {
    let mut ledger = Ledger::new();
    ledger.upsert(day("2025-03-05"), Record::new(90, 0, false));
    ledger.upsert(day("2025-03-08"), Record::new(0, 480, false));
    ledger.upsert(day("2025-03-09"), Record::new(15, 240, true));
    ledger.upsert(day("2025-03-14"), Record::new(0, 0, true));
    ledger.upsert(day("2025-04-01"), Record::new(600, 600, true));
    ledger.upsert(day("2024-03-10"), Record::new(600, 0, false));

    let s = ledger.aggregate_month(2025, 3).expect("valid month");
    assert_eq!(s.total_overtime_minutes, 105);
    assert_eq!(s.holiday_work_day_count, 2);
    assert_eq!(s.total_holiday_work_minutes, 720);
    assert_eq!(s.paid_leave_day_count, 2);
}

#[test]
fn test_aggregate_month_without_entries_is_zero() {
    let ledger = Ledger::new();
    let s = ledger.aggregate_month(2025, 2).expect("valid month");
    assert_eq!(s.total_overtime_minutes, 0);
    assert_eq!(s.holiday_work_day_count, 0);
    assert_eq!(s.total_holiday_work_minutes, 0);
    assert_eq!(s.paid_leave_day_count, 0);
}

#[test]
fn test_aggregate_month_rejects_bad_month() {
    let ledger = Ledger::new();
    assert!(ledger.aggregate_month(2025, 0).is_err());
    assert!(ledger.aggregate_month(2025, 13).is_err());
}

#[test]
fn test_paid_leave_for_year() {
    let mut ledger = Ledger::new();
    ledger.upsert(day("2025-01-02"), Record::new(0, 0, true));
    ledger.upsert(day("2025-07-01"), Record::new(30, 0, true));
    ledger.upsert(day("2025-12-31"), Record::new(0, 0, true));
    ledger.upsert(day("2025-06-06"), Record::new(30, 0, false));
    ledger.upsert(day("2024-12-31"), Record::new(0, 0, true));
    ledger.upsert(day("2026-01-01"), Record::new(0, 0, true));

    assert_eq!(ledger.aggregate_paid_leave_for_year(2025).expect("year"), 3);
    assert_eq!(ledger.aggregate_paid_leave_for_year(2023).expect("year"), 0);
}

#[test]
fn test_paid_leave_days_by_scope() {
    let mut ledger = Ledger::new();
    ledger.upsert(day("2025-03-05"), Record::new(90, 0, false));
    ledger.upsert(day("2025-03-14"), Record::new(0, 0, true));
    ledger.upsert(day("2025-07-01"), Record::new(0, 0, true));
    ledger.upsert(day("2024-03-20"), Record::new(0, 0, true));

    let march: MonthKey = "2025-03".parse().expect("valid month");
    assert_eq!(ledger.paid_leave_days(&march, PaidLeaveScope::Month), 1);
    assert_eq!(ledger.paid_leave_days(&march, PaidLeaveScope::Year), 2);

    let line = summary_line(&ledger, &march, PaidLeaveScope::Year);
    assert!(line.contains("2 days"));
    assert!(line.ends_with("this year"));

    let line = summary_line(&ledger, &march, PaidLeaveScope::Month);
    assert!(line.contains("1 day"));
    assert!(line.ends_with("this month"));
}

#[test]
fn test_year_totals_match_months() {
    let mut ledger = Ledger::new();
    ledger.upsert(day("2025-01-10"), Record::new(60, 0, false));
    ledger.upsert(day("2025-06-07"), Record::new(0, 300, false));
    ledger.upsert(day("2025-11-20"), Record::new(45, 0, true));

    let y = ledger.aggregate_year(2025).expect("year");
    assert_eq!(y.months.len(), 12);
    assert_eq!(y.total_overtime_minutes, 105);
    assert_eq!(y.holiday_work_day_count, 1);
    assert_eq!(y.total_holiday_work_minutes, 300);
    assert_eq!(y.paid_leave_day_count, 1);

    let sum: u32 = y.months.iter().map(|(_, s)| s.total_overtime_minutes).sum();
    assert_eq!(sum, y.total_overtime_minutes);
}

#[test]
fn test_entries_between_is_inclusive_and_ordered() {
    let mut ledger = Ledger::new();
    for d in ["2025-03-01", "2025-03-15", "2025-03-31", "2025-04-01"] {
        ledger.upsert(day(d), Record::new(10, 0, false));
    }

    let keys: Vec<String> = ledger
        .entries_between(day("2025-03-01")..=day("2025-03-31"))
        .map(|(k, _)| k.to_string())
        .collect();
    assert_eq!(keys, ["2025-03-01", "2025-03-15", "2025-03-31"]);

    let reversed = ledger.entries_between(day("2025-04-01")..=day("2025-03-01"));
    assert_eq!(reversed.count(), 0);
}

#[test]
fn test_blob_uses_stored_field_names() {
    let mut ledger = Ledger::new();
    ledger.upsert(day("2025-03-05"), Record::new(90, 0, true));

    let blob = ledger.to_blob().expect("serialize");
    let v: serde_json::Value = serde_json::from_str(&blob).expect("json");
    assert_eq!(v["2025-03-05"]["overtime"], 90);
    assert_eq!(v["2025-03-05"]["holidayWork"], 0);
    assert_eq!(v["2025-03-05"]["paidLeave"], true);
}

#[test]
fn test_from_blob_skips_bad_entries() {
    let blob = r#"{
        "2025-03-05": {"overtime": 90, "holidayWork": 0, "paidLeave": false},
        "2025-03-06": {"overtime": null, "paidLeave": true},
        "2025-03-07": {"overtime": 0, "holidayWork": 0, "paidLeave": false},
        "2025-3-8": {"overtime": 10},
        "not a date": {"overtime": 10},
        "2025-03-09": "garbage"
    }"#;

    let ledger = Ledger::from_blob(Some(blob));
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.get(&day("2025-03-05")), Some(&Record::new(90, 0, false)));
    assert_eq!(ledger.get(&day("2025-03-06")), Some(&Record::new(0, 0, true)));
}

#[test]
fn test_from_blob_accepts_float_and_text_minutes() {
    let blob = r#"{
        "2025-03-05": {"overtime": 90.0, "holidayWork": "120", "paidLeave": false},
        "2025-03-06": {"overtime": "45", "holidayWork": 29.6},
        "2025-03-07": {"overtime": -30, "holidayWork": " ", "paidLeave": true},
        "2025-03-08": {"overtime": "ninety"}
    }"#;

    let ledger = Ledger::from_blob(Some(blob));
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.get(&day("2025-03-05")), Some(&Record::new(90, 120, false)));
    assert_eq!(ledger.get(&day("2025-03-06")), Some(&Record::new(45, 30, false)));
    assert_eq!(ledger.get(&day("2025-03-07")), Some(&Record::new(0, 0, true)));
    assert!(!ledger.contains(&day("2025-03-08")));
}

#[test]
fn test_from_blob_malformed_gives_empty_ledger() {
    assert!(Ledger::from_blob(None).is_empty());
    assert!(Ledger::from_blob(Some("")).is_empty());
    assert!(Ledger::from_blob(Some("{not json")).is_empty());
    assert!(Ledger::from_blob(Some("[1, 2, 3]")).is_empty());
    assert!(Ledger::from_blob(Some("null")).is_empty());
}

#[test]
fn test_book_persists_on_every_upsert() {
    let mut book = AttendanceBook::load(MemoryStore::new(), DEFAULT_STORAGE_KEY).expect("load");
    book.upsert(day("2025-03-05"), Record::new(90, 0, false))
        .expect("upsert");
    book.upsert(day("2025-03-14"), Record::new(0, 0, true))
        .expect("upsert");

    let (ledger, store) = book.into_parts();
    let reloaded = AttendanceBook::load(store, DEFAULT_STORAGE_KEY).expect("reload");
    assert_eq!(reloaded.ledger(), &ledger);
    assert_eq!(reloaded.ledger().len(), 2);
}

#[test]
fn test_book_removal_is_persisted() {
    let mut book = AttendanceBook::load(MemoryStore::new(), "workRecords").expect("load");
    book.upsert(day("2025-03-05"), Record::new(90, 0, false))
        .expect("upsert");
    book.upsert(day("2025-03-05"), Record::default())
        .expect("upsert");

    let blob = book
        .store()
        .get_string("workRecords")
        .expect("get")
        .expect("blob written");
    assert_eq!(blob, "{}");
}

#[test]
fn test_book_recovers_from_corrupt_blob() {
    let store = MemoryStore::with_value(DEFAULT_STORAGE_KEY, "%%% corrupted %%%");
    let mut book = AttendanceBook::load(store, DEFAULT_STORAGE_KEY).expect("load");
    assert!(book.ledger().is_empty());

    book.upsert(day("2025-03-05"), Record::new(10, 0, false))
        .expect("upsert");
    let blob = book
        .store()
        .get_string(DEFAULT_STORAGE_KEY)
        .expect("get")
        .expect("blob");
    assert!(blob.contains("2025-03-05"));
}
