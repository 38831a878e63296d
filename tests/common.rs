#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// rtriplog binary with HOME pointed at a scratch directory, so a real
/// user configuration never leaks into the tests.
pub fn rtl() -> Command {
    let mut cmd = cargo_bin_cmd!("rtriplog");
    let home = env::temp_dir().join("rtriplog_test_home");
    fs::create_dir_all(&home).ok();
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtriplog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize an empty logbook database (no config file written)
pub fn init_db(db_path: &str) {
    rtl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Start and finish one trip, returning the new trip id
pub fn record_trip(db_path: &str, date: &str, start_odo: &str, end_odo: &str) -> String {
    rtl()
        .args([
            "--db", db_path, "start", "--odo", start_odo, "--date", date, "--time", "08:00",
        ])
        .assert()
        .success();

    let out = rtl()
        .args(["--db", db_path, "finish", "--odo", end_odo, "--time", "09:15"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    trip_id_from(&String::from_utf8_lossy(&out))
}

/// Extract the id printed by `finish`
pub fn trip_id_from(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("Trip id: "))
        .map(|s| s.trim().to_string())
        .expect("finish prints the trip id")
}

/// Raw JSON stored under `key`, read straight from SQLite
pub fn stored_value(db_path: &str, key: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
        row.get::<_, String>(0)
    })
    .ok()
}

/// Overwrite the raw JSON stored under `key`
pub fn put_value(db_path: &str, key: &str, value: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute(
        "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        [key, value],
    )
    .expect("write storage");
}
