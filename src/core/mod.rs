pub mod logbook;
pub mod reminder;
pub mod settings;
pub mod stats;
pub mod trip;

pub use logbook::Logbook;
pub use reminder::{URGENT_THRESHOLD_KM, reminder_progress};
pub use settings::{NormalizedSettings, ReminderField, SettingsForm, normalize_settings};
pub use stats::compute_stats;
pub use trip::{complete_trip, last_odometer};

/// Fresh identifier for trips and reminders.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
