mod common;

use common::{init_db, put_value, record_trip, rtl, setup_test_db, stored_value};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_settings_defaults() {
    let db_path = setup_test_db("settings_defaults");
    init_db(&db_path);

    rtl()
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("1.65"))
        .stdout(contains("6.5"))
        .stdout(contains("Service reminders:"));
}

#[test]
fn test_settings_accept_comma_decimal() {
    let db_path = setup_test_db("settings_comma");
    init_db(&db_path);

    rtl()
        .args(["--db", &db_path, "settings", "--fuel-price", "1,72"])
        .assert()
        .success()
        .stdout(contains("Settings saved"));

    let raw = stored_value(&db_path, "settings").expect("settings stored");
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["fuelPrice"], 1.72);
    assert_eq!(v["averageConsumption"], 6.5);
}

#[test]
fn test_invalid_settings_are_not_saved() {
    let db_path = setup_test_db("settings_invalid");
    init_db(&db_path);

    rtl()
        .args([
            "--db",
            &db_path,
            "settings",
            "--fuel-price",
            "abc",
            "--consumption",
            "5.9",
        ])
        .assert()
        .success()
        .stdout(contains("not saved"));

    // neither field was written
    assert!(stored_value(&db_path, "settings").is_none());

    rtl()
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("1.65"))
        .stdout(contains("5.9").not());
}

#[test]
fn test_reminder_lifecycle() {
    let db_path = setup_test_db("settings_reminders");
    init_db(&db_path);

    let out = rtl()
        .args([
            "--db",
            &db_path,
            "reminder",
            "add",
            "--name",
            "Výmena oleja",
            "--interval",
            "15000",
            "--last-service",
            "0",
        ])
        .assert()
        .success()
        .stdout(contains("Service reminder added"))
        .get_output()
        .stdout
        .clone();

    let out = String::from_utf8_lossy(&out);
    let id = out
        .split("Service reminder added: ")
        .nth(1)
        .map(|s| s.trim().to_string())
        .expect("reminder id printed");

    record_trip(&db_path, "2025-02-01", "14000", "14500");

    rtl()
        .args(["--db", &db_path, "reminder", "list"])
        .assert()
        .success()
        .stdout(contains("Výmena oleja"))
        .stdout(contains("500 km to go"))
        .stdout(contains("96.7%"));

    rtl()
        .args(["--db", &db_path, "reminder", "set", &id, "--last-service", "14000"])
        .assert()
        .success();

    rtl()
        .args(["--db", &db_path, "reminder", "list"])
        .assert()
        .success()
        .stdout(contains("14 500 km to go"))
        .stdout(contains("due at 29 000 km"));

    rtl()
        .args(["--db", &db_path, "reminder", "del", &id])
        .assert()
        .success()
        .stdout(contains("deleted"));

    rtl()
        .args(["--db", &db_path, "reminder", "list"])
        .assert()
        .success()
        .stdout(contains("No service reminders"));
}

#[test]
fn test_reminder_set_unknown_id_fails() {
    let db_path = setup_test_db("settings_reminder_unknown");
    init_db(&db_path);

    rtl()
        .args(["--db", &db_path, "reminder", "set", "missing", "--interval", "100"])
        .assert()
        .failure()
        .stderr(contains("Service reminder not found"));
}

#[test]
fn test_legacy_settings_are_migrated() {
    let db_path = setup_test_db("settings_legacy");
    init_db(&db_path);

    put_value(
        &db_path,
        "settings",
        r#"{"fuelPrice":1.65,"averageConsumption":6.5,"serviceInterval":10000,"serviceName":"Oil","lastServiceOdometer":5000}"#,
    );

    rtl()
        .args(["--db", &db_path, "reminder", "list"])
        .assert()
        .success()
        .stdout(contains("migrated-"))
        .stdout(contains("Oil"))
        .stdout(contains("due at 15 000 km"));

    // written back in the list layout only
    let raw = stored_value(&db_path, "settings").expect("settings stored");
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(v.get("serviceInterval").is_none());
    assert_eq!(v["serviceReminders"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(v["serviceReminders"][0]["interval"], 10000);
}

#[test]
fn test_corrupt_storage_falls_back_to_defaults() {
    let db_path = setup_test_db("settings_corrupt");
    init_db(&db_path);

    put_value(&db_path, "settings", "{not json");
    put_value(&db_path, "trips", r#"{"unexpected":"object"}"#);
    put_value(&db_path, "activeTrip", "42");

    rtl()
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("1.65"));

    rtl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No trips recorded"));

    rtl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Trip in progress").not());
}

#[test]
fn test_settings_change_only_checks_given_field() {
    let db_path = setup_test_db("settings_single_field");
    init_db(&db_path);
    put_value(
        &db_path,
        "settings",
        r#"{"fuelPrice":0,"averageConsumption":6.5,"serviceReminders":[]}"#,
    );

    rtl()
        .args(["--db", &db_path, "settings", "--consumption", "7"])
        .assert()
        .success()
        .stdout(contains("Settings saved"));

    let v: serde_json::Value =
        serde_json::from_str(&stored_value(&db_path, "settings").unwrap()).unwrap();
    assert_eq!(v["fuelPrice"], 0.0);
    assert_eq!(v["averageConsumption"], 7.0);

    rtl()
        .args(["--db", &db_path, "settings", "--fuel-price", "0"])
        .assert()
        .success()
        .stdout(contains("fuel price"))
        .stdout(contains("not saved"));
}
