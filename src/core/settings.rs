//! Settings normalization and editing.
//!
//! Whatever layout a stored settings document uses, `normalize_settings` is
//! the single path from it to `AppSettings`.

use crate::errors::{AppError, AppResult};
use crate::models::settings::{DEFAULT_CONSUMPTION, DEFAULT_FUEL_PRICE};
use crate::models::{AppSettings, LegacyReminder, ServiceReminder, SettingsShape, StoredSettings};
use chrono::{DateTime, TimeZone};

pub const LEGACY_REMINDER_NAME: &str = "Servisný interval";
pub const LEGACY_REMINDER_INTERVAL: u32 = 15000;

pub struct NormalizedSettings {
    pub settings: AppSettings,
    /// The document carried the inline single-reminder layout.
    pub migrated: bool,
}

/// Id given to a reminder synthesized from the inline layout.
pub fn migration_id<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("migrated-{}", now.timestamp_millis())
}

fn reminder_from_legacy(legacy: LegacyReminder, id: String) -> ServiceReminder {
    ServiceReminder {
        id,
        name: legacy
            .service_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| LEGACY_REMINDER_NAME.to_string()),
        interval: legacy
            .service_interval
            .filter(|&v| v != 0)
            .unwrap_or(LEGACY_REMINDER_INTERVAL),
        last_service_odometer: legacy.last_service_odometer.unwrap_or(0),
    }
}

/// Merge a stored document over the defaults, converting an inline reminder
/// into a one-element list. Already-canonical input passes through as is.
pub fn normalize_settings<F>(stored: StoredSettings, make_id: F) -> NormalizedSettings
where
    F: FnOnce() -> String,
{
    let (service_reminders, migrated) = match stored.shape() {
        SettingsShape::Current(list) => (list, false),
        SettingsShape::Legacy(legacy) => (vec![reminder_from_legacy(legacy, make_id())], true),
        SettingsShape::Bare => (Vec::new(), false),
    };

    NormalizedSettings {
        settings: AppSettings {
            fuel_price: stored.fuel_price.unwrap_or(DEFAULT_FUEL_PRICE),
            average_consumption: stored.average_consumption.unwrap_or(DEFAULT_CONSUMPTION),
            service_reminders,
        },
        migrated,
    }
}

/// Parse a user-typed decimal; both `.` and `,` are accepted as separator.
pub fn parse_decimal(field: &'static str, input: &str) -> AppResult<f64> {
    let invalid = || AppError::InvalidNumber {
        field,
        value: input.to_string(),
    };

    let value: f64 = input.trim().replace(',', ".").parse().map_err(|_| invalid())?;

    if !value.is_finite() || value <= 0.0 {
        return Err(invalid());
    }

    Ok(value)
}

/// Raw text of the settings form. A `None` field is left as it is; every
/// supplied field must parse before anything is applied.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub fuel_price: Option<String>,
    pub average_consumption: Option<String>,
}

impl SettingsForm {
    /// Form pre-filled with every current value.
    pub fn from_settings(s: &AppSettings) -> Self {
        Self {
            fuel_price: Some(s.fuel_price.to_string()),
            average_consumption: Some(s.average_consumption.to_string()),
        }
    }

    /// Resolve the form against `current`, validating only supplied fields.
    pub fn parse(&self, current: &AppSettings) -> AppResult<(f64, f64)> {
        let fuel_price = match &self.fuel_price {
            Some(v) => parse_decimal("fuel price", v)?,
            None => current.fuel_price,
        };
        let consumption = match &self.average_consumption {
            Some(v) => parse_decimal("average consumption", v)?,
            None => current.average_consumption,
        };
        Ok((fuel_price, consumption))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReminderField {
    Name(String),
    Interval(u32),
    LastServiceOdometer(u32),
}

impl AppSettings {
    /// Apply the form only if every field parses; otherwise nothing changes.
    pub fn apply_form(&mut self, form: &SettingsForm) -> AppResult<()> {
        let (fuel_price, consumption) = form.parse(self)?;
        self.fuel_price = fuel_price;
        self.average_consumption = consumption;
        Ok(())
    }

    pub fn reminder(&self, id: &str) -> Option<&ServiceReminder> {
        self.service_reminders.iter().find(|r| r.id == id)
    }

    /// Append a blank reminder to be filled in by the caller.
    pub fn add_reminder(&mut self, id: String) -> &ServiceReminder {
        self.service_reminders.push(ServiceReminder {
            id,
            name: String::new(),
            interval: 0,
            last_service_odometer: 0,
        });
        &self.service_reminders[self.service_reminders.len() - 1]
    }

    /// Returns false when no reminder has this id.
    pub fn update_reminder(&mut self, id: &str, field: ReminderField) -> bool {
        let Some(r) = self.service_reminders.iter_mut().find(|r| r.id == id) else {
            return false;
        };

        match field {
            ReminderField::Name(name) => r.name = name,
            ReminderField::Interval(interval) => r.interval = interval,
            ReminderField::LastServiceOdometer(odo) => r.last_service_odometer = odo,
        }
        true
    }

    pub fn delete_reminder(&mut self, id: &str) -> bool {
        let before = self.service_reminders.len();
        self.service_reminders.retain(|r| r.id != id);
        self.service_reminders.len() != before
    }
}
