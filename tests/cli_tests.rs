use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rti, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_set_reports_saved_record() {
    let db_path = setup_test_db("cli_set");
    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "set", "2025-03-05", "--ot", "1h30m"])
        .assert()
        .success()
        .stdout(contains("Saved 2025-03-05: overtime 1h30m"));

    // second call keeps overtime and adds paid leave
    rti()
        .args(["--db", &db_path, "set", "2025-03-05", "--paid-leave"])
        .assert()
        .success()
        .stdout(contains("overtime 1h30m, paid leave"));
}

#[test]
fn test_set_with_hour_and_minute_fields() {
    let db_path = setup_test_db("cli_set_fields");
    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "set", "2025-03-05", "--ot-h", "1", "--ot-m", "30"])
        .assert()
        .success()
        .stdout(contains("Saved 2025-03-05: overtime 1h30m"));

    rti()
        .args(["--db", &db_path, "set", "2025-03-08", "--hw-h", "-2", "--hw-m", "15"])
        .assert()
        .success()
        .stdout(contains("Saved 2025-03-08: holiday work 0h15m"));

    rti()
        .args(["--db", &db_path, "set", "2025-03-09", "--ot", "30", "--ot-h", "1"])
        .assert()
        .failure();
}

#[test]
fn test_set_zero_values_removes_day() {
    let db_path = setup_test_db("cli_set_zero");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "set", "2025-03-05", "--ot", "0"])
        .assert()
        .success()
        .stdout(contains("Cleared 2025-03-05"));

    rti()
        .args(["--db", &db_path, "summary", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(contains("Overtime:          00h 00m"));
}

#[test]
fn test_set_rejects_bad_input() {
    let db_path = setup_test_db("cli_set_bad");
    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "set", "2025-3-5", "--ot", "30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rti()
        .args(["--db", &db_path, "set", "2025-03-05", "--ot", "lots"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));
}

#[test]
fn test_clear_with_yes() {
    let db_path = setup_test_db("cli_clear");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "clear", "2025-03-08", "-y"])
        .assert()
        .success()
        .stdout(contains("Cleared 2025-03-08"));

    rti()
        .args(["--db", &db_path, "clear", "2025-03-08", "-y"])
        .assert()
        .success()
        .stdout(contains("Nothing recorded for 2025-03-08"));
}

#[test]
fn test_show_month_calendar() {
    let db_path = setup_test_db("cli_show");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(contains("March 2025"))
        .stdout(contains("1h30m"))
        .stdout(contains("HW"))
        .stdout(contains("PL"))
        .stdout(contains("Vernal Equinox Day"));

    rti()
        .args(["--db", &db_path, "show", "--month", "2025-03", "--prev", "3"])
        .assert()
        .success()
        .stdout(contains("December 2024"));
}

#[test]
fn test_show_rejects_out_of_range_offsets() {
    let db_path = setup_test_db("cli_show_offsets");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show", "--month", "2025-03", "--next", "4294967295"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));

    rti()
        .args(["--db", &db_path, "show", "--month", "2025-03", "--prev", "2147483648"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));

    rti()
        .args(["--db", &db_path, "show", "--month", "2025-03", "--next", "2147483647"])
        .assert()
        .success()
        .stdout(contains("December 9999"));
}

#[test]
fn test_summary_paid_leave_scope_year() {
    let db_path = setup_test_db("cli_summary_scope");
    init_db_with_data(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "summary",
            "--month",
            "2025-03",
            "--paid-leave-scope",
            "year",
        ])
        .assert()
        .success()
        .stdout(contains("2 days"))
        .stdout(contains("this year"));

    rti()
        .args([
            "--db",
            &db_path,
            "summary",
            "--month",
            "2025-03",
            "--paid-leave-scope",
            "month",
        ])
        .assert()
        .success()
        .stdout(contains("this month").and(contains("this year").not()));
}

#[test]
fn test_summary_month_and_year() {
    let db_path = setup_test_db("cli_summary");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "summary", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(contains("Summary for March 2025"))
        .stdout(contains("Overtime:          01h 30m"))
        .stdout(contains("Holiday work days: 1 day"))
        .stdout(contains("Holiday work time: 08h 00m"))
        .stdout(contains("Paid leave:        1 day this month, 2 days in 2025"));

    rti()
        .args(["--db", &db_path, "summary", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("Summary for 2025"))
        .stdout(contains("Total"))
        .stdout(contains("July"));

    rti()
        .args(["--db", &db_path, "summary", "--year", "2019"])
        .assert()
        .success()
        .stdout(contains("Nothing recorded in 2019."));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db_with_data(&db_path);

    let csv_out = temp_out("cli_export_march", "csv");
    rti()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--range",
            "2025-03", "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&csv_out).expect("read csv");
    assert!(content.starts_with("date,overtime_minutes,overtime,"));
    assert!(content.contains("2025-03-05,90,1h30m"));
    assert!(content.contains("2025-03-14"));
    assert!(!content.contains("2025-07-01"));

    let json_out = temp_out("cli_export_all", "json");
    rti()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--force",
        ])
        .assert()
        .success();

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read json")).expect("json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(4));
    assert_eq!(rows[0]["date"], "2025-03-05");
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("cli_export_empty");
    init_db_with_data(&db_path);

    let out = temp_out("cli_export_empty", "csv");
    rti()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2019"])
        .assert()
        .success()
        .stdout(contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_relative");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_data(&db_path);

    let plain = temp_out("cli_backup_plain", "sqlite");
    rti()
        .args(["--db", &db_path, "backup", "--file", &plain, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(std::path::Path::new(&plain).exists());

    let zipped = temp_out("cli_backup_zip", "zip");
    rti()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(std::path::Path::new(&zipped).exists());
}

#[test]
fn test_log_and_db_info() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("2025-03-05")));

    rti()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Recorded days:"))
        .stdout(contains("2025-03-05"))
        .stdout(contains("2025-07-01"));

    rti()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}
