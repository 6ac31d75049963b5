#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and record a small March 2025 dataset
pub fn init_db_with_data(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", db_path, "set", "2025-03-05", "--ot", "1:30"])
        .assert()
        .success();

    rti()
        .args(["--db", db_path, "set", "2025-03-08", "--hw", "8h"])
        .assert()
        .success();

    rti()
        .args(["--db", db_path, "set", "2025-03-14", "--paid-leave"])
        .assert()
        .success();

    rti()
        .args(["--db", db_path, "set", "2025-07-01", "--paid-leave"])
        .assert()
        .success();
}
