//! Top-level application state: trips, the current-trip slot and settings.
//!
//! The in-memory copies are authoritative for the lifetime of a `Logbook`.
//! Each successful mutation writes the affected key straight away; the three
//! keys are written independently and a failure on one is not rolled back on
//! the others.

use crate::core::settings::{ReminderField, SettingsForm, migration_id, normalize_settings};
use crate::core::trip::{complete_trip, insert_trip, last_odometer, remove_trip};
use crate::core::{compute_stats, new_id, reminder_progress};
use crate::errors::{AppError, AppResult};
use crate::models::{
    ActiveTrip, AppSettings, HistoryStats, ReminderProgress, StoredSettings, Trip, TripSlot,
};
use crate::storage::{self, ACTIVE_TRIP_KEY, KeyValueStore, SETTINGS_KEY, TRIPS_KEY};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};

pub struct Logbook<S: KeyValueStore> {
    store: S,
    trips: Vec<Trip>,
    slot: TripSlot,
    settings: AppSettings,
}

impl<S: KeyValueStore> Logbook<S> {
    pub fn load(store: S) -> AppResult<Self> {
        Self::load_at(store, Local::now())
    }

    /// Load every key, substituting defaults for anything missing or
    /// unreadable. Settings in the inline-reminder layout are converted and
    /// written back in canonical form.
    pub fn load_at(mut store: S, now: DateTime<Local>) -> AppResult<Self> {
        let trips: Vec<Trip> = storage::load_list(&store, TRIPS_KEY)?;
        let active: Option<ActiveTrip> = storage::load(&store, ACTIVE_TRIP_KEY, None)?;
        let stored: StoredSettings =
            storage::load(&store, SETTINGS_KEY, StoredSettings::default())?;

        let normalized = normalize_settings(stored, || migration_id(&now));
        if normalized.migrated {
            storage::save(&mut store, SETTINGS_KEY, &normalized.settings)?;
        }

        Ok(Self {
            store,
            trips,
            slot: TripSlot::from(active),
            settings: normalized.settings,
        })
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn slot(&self) -> &TripSlot {
        &self.slot
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn last_odometer(&self) -> u32 {
        last_odometer(&self.trips)
    }

    pub fn stats(&self, today: NaiveDate) -> HistoryStats {
        compute_stats(&self.trips, today)
    }

    pub fn reminder_progress(&self) -> Vec<ReminderProgress> {
        let odo = self.last_odometer();
        self.settings
            .service_reminders
            .iter()
            .map(|r| reminder_progress(r, odo))
            .collect()
    }

    // ---------------------------
    // Trip lifecycle
    // ---------------------------

    pub fn start_trip(
        &mut self,
        start_odometer: u32,
        date: NaiveDate,
        time: NaiveTime,
        note: Option<String>,
    ) -> AppResult<&ActiveTrip> {
        self.slot.start(ActiveTrip {
            start_date: date,
            start_time: time,
            start_odometer,
            note: note.filter(|n| !n.trim().is_empty()),
        })?;

        let active = self.slot.active().ok_or(AppError::NoActiveTrip)?;
        storage::save(&mut self.store, ACTIVE_TRIP_KEY, active)?;
        Ok(active)
    }

    /// Close the running trip. Validation happens before anything changes,
    /// so a rejected finish leaves the trip running.
    pub fn finish_trip(
        &mut self,
        end_odometer: u32,
        end_time: NaiveTime,
        date: NaiveDate,
    ) -> AppResult<&Trip> {
        let active = self.slot.active().ok_or(AppError::NoActiveTrip)?;
        let trip = complete_trip(new_id(), active, end_odometer, end_time, date, &self.settings)?;

        insert_trip(&mut self.trips, trip);
        self.slot = TripSlot::Idle;

        storage::save(&mut self.store, TRIPS_KEY, &self.trips)?;
        storage::clear(&mut self.store, ACTIVE_TRIP_KEY)?;

        Ok(&self.trips[0])
    }

    pub fn cancel_trip(&mut self) -> AppResult<ActiveTrip> {
        let active = self.slot.take()?;
        storage::clear(&mut self.store, ACTIVE_TRIP_KEY)?;
        Ok(active)
    }

    /// Returns false (and writes nothing) when no trip has this id.
    pub fn delete_trip(&mut self, id: &str) -> AppResult<bool> {
        if !remove_trip(&mut self.trips, id) {
            return Ok(false);
        }
        storage::save(&mut self.store, TRIPS_KEY, &self.trips)?;
        Ok(true)
    }

    // ---------------------------
    // Settings
    // ---------------------------

    /// Invalid input is returned as an error with no state change and no write.
    pub fn save_settings(&mut self, form: &SettingsForm) -> AppResult<()> {
        self.settings.apply_form(form)?;
        self.persist_settings()
    }

    pub fn add_reminder(&mut self) -> AppResult<String> {
        let id = self.settings.add_reminder(new_id()).id.clone();
        self.persist_settings()?;
        Ok(id)
    }

    pub fn update_reminder(&mut self, id: &str, field: ReminderField) -> AppResult<bool> {
        if !self.settings.update_reminder(id, field) {
            return Ok(false);
        }
        self.persist_settings()?;
        Ok(true)
    }

    pub fn delete_reminder(&mut self, id: &str) -> AppResult<bool> {
        if !self.settings.delete_reminder(id) {
            return Ok(false);
        }
        self.persist_settings()?;
        Ok(true)
    }

    fn persist_settings(&mut self) -> AppResult<()> {
        storage::save(&mut self.store, SETTINGS_KEY, &self.settings)
    }
}
