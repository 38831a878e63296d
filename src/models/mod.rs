pub mod reminder;
pub mod settings;
pub mod stats;
pub mod trip;

pub use reminder::{ReminderProgress, ServiceReminder};
pub use settings::{AppSettings, LegacyReminder, SettingsShape, StoredSettings};
pub use stats::HistoryStats;
pub use trip::{ActiveTrip, Trip, TripSlot};
