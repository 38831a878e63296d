use chrono::{NaiveDate, NaiveTime};
use rtriplog::core::{Logbook, SettingsForm};
use rtriplog::errors::AppError;
use rtriplog::models::{AppSettings, TripSlot};
use rtriplog::storage::{
    self, ACTIVE_TRIP_KEY, KeyValueStore, MemoryStore, SETTINGS_KEY, TRIPS_KEY,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn form(price: &str, consumption: &str) -> SettingsForm {
    SettingsForm {
        fuel_price: Some(price.to_string()),
        average_consumption: Some(consumption.to_string()),
    }
}

fn drive<S: KeyValueStore>(book: &mut Logbook<S>, d: u32, start: u32, end: u32) -> String {
    book.start_trip(start, day(d), at(8, 0), None).unwrap();
    book.finish_trip(end, at(9, 0), day(d)).unwrap().id.clone()
}

#[test]
fn test_trip_cost_scenario() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    book.save_settings(&form("1.5", "6")).unwrap();

    book.start_trip(1000, day(1), at(7, 0), Some("work".into()))
        .unwrap();
    let trip = book.finish_trip(1100, at(7, 40), day(1)).unwrap().clone();

    assert_eq!(trip.distance_km, 100);
    assert_eq!(trip.fuel_consumed, 6.0);
    assert_eq!(trip.total_cost, 9.0);
    assert_eq!(trip.note.as_deref(), Some("work"));
    assert_eq!(trip.start_time, at(7, 0));
    assert_eq!(trip.end_time, at(7, 40));
    assert!(book.slot().is_idle());
}

#[test]
fn test_trip_derived_fields_are_consistent() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    book.save_settings(&form("1,739", "7,2")).unwrap();

    for (i, (start, end)) in [(0, 37), (37, 250), (250, 250), (250, 1999)].iter().enumerate() {
        drive(&mut book, i as u32 + 1, *start, *end);
    }

    for t in book.trips() {
        assert_eq!(t.distance_km, t.end_odometer - t.start_odometer);
        assert_eq!(
            t.fuel_consumed,
            f64::from(t.distance_km) * t.consumption_at_time / 100.0
        );
        assert_eq!(t.total_cost, t.fuel_consumed * t.fuel_price_at_time);
    }
}

#[test]
fn test_trip_keeps_settings_snapshot() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    book.save_settings(&form("1.5", "6")).unwrap();
    drive(&mut book, 1, 0, 100);

    book.save_settings(&form("2.0", "8")).unwrap();

    let t = &book.trips()[0];
    assert_eq!(t.fuel_price_at_time, 1.5);
    assert_eq!(t.consumption_at_time, 6.0);
    assert_eq!(t.total_cost, 9.0);
}

#[test]
fn test_finish_rejects_odometer_regression() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    book.start_trip(1000, day(2), at(10, 0), None).unwrap();

    let err = book.finish_trip(999, at(11, 0), day(2)).unwrap_err();
    assert!(matches!(
        err,
        AppError::OdometerRegression {
            start: 1000,
            end: 999
        }
    ));

    assert!(book.trips().is_empty());
    assert!(matches!(book.slot(), TripSlot::InProgress(a) if a.start_odometer == 1000));

    let store = book.into_store();
    assert!(!store.contains(TRIPS_KEY));
    assert!(store.contains(ACTIVE_TRIP_KEY));
}

#[test]
fn test_finish_without_active_trip() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    let err = book.finish_trip(10, at(8, 0), day(1)).unwrap_err();
    assert!(matches!(err, AppError::NoActiveTrip));
}

#[test]
fn test_double_start_is_refused() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    book.start_trip(10, day(1), at(8, 0), None).unwrap();

    let err = book.start_trip(20, day(1), at(9, 0), None).unwrap_err();
    assert!(matches!(err, AppError::TripAlreadyActive(_)));
    assert_eq!(book.slot().active().map(|a| a.start_odometer), Some(10));
}

#[test]
fn test_cancel_clears_active_key() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    book.start_trip(10, day(1), at(8, 0), None).unwrap();
    assert!(book.store().contains(ACTIVE_TRIP_KEY));

    let cancelled = book.cancel_trip().unwrap();
    assert_eq!(cancelled.start_odometer, 10);
    assert!(book.slot().is_idle());
    assert!(book.trips().is_empty());
    assert!(!book.store().contains(ACTIVE_TRIP_KEY));

    assert!(matches!(book.cancel_trip(), Err(AppError::NoActiveTrip)));
}

#[test]
fn test_trip_order_after_inserts_and_deletes() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();

    // dates deliberately out of order: ordering follows insertion
    let a = drive(&mut book, 20, 0, 10);
    let b = drive(&mut book, 5, 10, 20);
    let c = drive(&mut book, 12, 20, 30);
    let d = drive(&mut book, 1, 30, 40);

    assert!(book.delete_trip(&b).unwrap());

    let ids: Vec<&str> = book.trips().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![d.as_str(), c.as_str(), a.as_str()]);
    assert_eq!(book.last_odometer(), 40);
}

#[test]
fn test_delete_unknown_trip_leaves_collection_unchanged() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    drive(&mut book, 1, 0, 10);
    drive(&mut book, 2, 10, 25);

    let before = book.trips().to_vec();
    let raw_before = book.store().raw(TRIPS_KEY).map(str::to_string);

    assert!(!book.delete_trip("does-not-exist").unwrap());

    assert_eq!(book.trips(), before.as_slice());
    assert_eq!(book.store().raw(TRIPS_KEY).map(str::to_string), raw_before);
}

#[test]
fn test_invalid_settings_change_nothing() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();

    let err = book.save_settings(&form("1.80", "six")).unwrap_err();
    assert!(matches!(err, AppError::InvalidNumber { .. }));

    assert_eq!(book.settings(), &AppSettings::default());
    assert!(!book.store().contains(SETTINGS_KEY));
}

#[test]
fn test_state_survives_reload() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    book.save_settings(&form("1.61", "5.4")).unwrap();
    let id = book.add_reminder().unwrap();
    drive(&mut book, 3, 500, 620);
    book.start_trip(620, day(4), at(6, 15), Some("Košice".into()))
        .unwrap();

    let trips = book.trips().to_vec();
    let slot = book.slot().clone();
    let settings = book.settings().clone();

    let reloaded = Logbook::load(book.into_store()).unwrap();
    assert_eq!(reloaded.trips(), trips.as_slice());
    assert_eq!(reloaded.slot(), &slot);
    assert_eq!(reloaded.settings(), &settings);
    assert!(reloaded.settings().reminder(&id).is_some());
}

#[test]
fn test_storage_round_trip() {
    let mut book = Logbook::load(MemoryStore::new()).unwrap();
    drive(&mut book, 9, 100, 150);
    book.start_trip(150, day(10), at(12, 30), None).unwrap();
    let mut store = book.into_store();

    let trips: Vec<rtriplog::models::Trip> = storage::load(&store, TRIPS_KEY, Vec::new()).unwrap();
    storage::save(&mut store, TRIPS_KEY, &trips).unwrap();
    let again: Vec<rtriplog::models::Trip> = storage::load(&store, TRIPS_KEY, Vec::new()).unwrap();
    assert_eq!(trips, again);

    let active: Option<rtriplog::models::ActiveTrip> =
        storage::load(&store, ACTIVE_TRIP_KEY, None).unwrap();
    assert_eq!(active.map(|a| a.start_time), Some(at(12, 30)));

    let settings = AppSettings::default();
    storage::save(&mut store, SETTINGS_KEY, &settings).unwrap();
    let loaded: AppSettings = storage::load(&store, SETTINGS_KEY, AppSettings {
        fuel_price: 0.0,
        average_consumption: 0.0,
        service_reminders: Vec::new(),
    })
    .unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_corrupt_documents_use_defaults() {
    let store = MemoryStore::new()
        .with_raw(TRIPS_KEY, "[{\"id\": 1}]")
        .with_raw(ACTIVE_TRIP_KEY, "not json at all")
        .with_raw(SETTINGS_KEY, "[1, 2, 3]");

    let book = Logbook::load(store).unwrap();
    assert!(book.trips().is_empty());
    assert!(book.slot().is_idle());
    assert_eq!(book.settings(), &AppSettings::default());
}

#[test]
fn test_reads_trips_with_timestamp_dates() {
    let raw = r#"[{"id":"1718000000000","date":"2024-06-10T07:12:00.000Z","startTime":"07:12","endTime":"08:03:00","distanceKm":51,"fuelPriceAtTime":1.65,"consumptionAtTime":6.5,"totalCost":5.47,"fuelConsumed":3.315,"startOdometer":1000,"endOdometer":1051}]"#;
    let book = Logbook::load(MemoryStore::new().with_raw(TRIPS_KEY, raw)).unwrap();

    let t = &book.trips()[0];
    assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    assert_eq!(t.end_time, at(8, 3));
    assert_eq!(t.note, None);
    assert_eq!(book.last_odometer(), 1051);
}

#[test]
fn test_unreadable_trip_does_not_drop_the_others() {
    let raw = r#"[
        {"id":"b","date":"2025-06-02","startTime":"08:00","endTime":"09:00","distanceKm":40,"fuelPriceAtTime":1.65,"consumptionAtTime":6.5,"totalCost":4.29,"fuelConsumed":2.6,"startOdometer":1050,"endOdometer":1090},
        {"id":"a","date":"2025-06-01","startTime":"08:00","endTime":"09:00","distanceKm":50.5,"fuelPriceAtTime":1.65,"consumptionAtTime":6.5,"totalCost":5.4,"fuelConsumed":3.3,"startOdometer":1000,"endOdometer":1050}
    ]"#;
    let mut book = Logbook::load(MemoryStore::new().with_raw(TRIPS_KEY, raw)).unwrap();

    assert_eq!(book.trips().len(), 1);
    assert_eq!(book.trips()[0].id, "b");
    assert_eq!(book.last_odometer(), 1090);

    let new_id = drive(&mut book, 3, 1090, 1120);

    let stored: Vec<serde_json::Value> =
        serde_json::from_str(book.store().raw(TRIPS_KEY).unwrap()).unwrap();
    let ids: Vec<&str> = stored.iter().filter_map(|t| t["id"].as_str()).collect();
    assert_eq!(ids, vec![new_id.as_str(), "b"]);
}

#[test]
fn test_trips_document_that_is_not_a_list() {
    let store = MemoryStore::new().with_raw(TRIPS_KEY, r#"{"id":"b"}"#);
    let book = Logbook::load(store).unwrap();
    assert!(book.trips().is_empty());
}

#[test]
fn test_untouched_setting_is_not_revalidated() {
    let store = MemoryStore::new().with_raw(SETTINGS_KEY, r#"{"fuelPrice":0,"averageConsumption":6.5,"serviceReminders":[]}"#);
    let mut book = Logbook::load(store).unwrap();

    let change = SettingsForm {
        average_consumption: Some("7".to_string()),
        ..SettingsForm::default()
    };
    book.save_settings(&change).unwrap();
    assert_eq!(book.settings().fuel_price, 0.0);
    assert_eq!(book.settings().average_consumption, 7.0);

    // the pre-filled form still validates everything it carries
    let prefilled = SettingsForm::from_settings(book.settings());
    let err = book.save_settings(&prefilled).unwrap_err();
    assert!(matches!(err, AppError::InvalidNumber { field: "fuel price", .. }));
}
