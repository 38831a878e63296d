use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReminder {
    pub id: String,
    pub name: String,
    pub interval: u32,              // km between services
    pub last_service_odometer: u32, // odometer at last service
}

impl ServiceReminder {
    /// Odometer reading at which the next service is due.
    pub fn due_at(&self) -> u64 {
        u64::from(self.last_service_odometer) + u64::from(self.interval)
    }
}

/// Derived, display-only view of a reminder against the latest odometer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderProgress {
    pub reminder_id: String,
    pub name: String,
    pub distance_since_service: i64,
    pub remaining: i64,
    pub progress_percent: f64,
    pub due_at: u64,
    pub urgent: bool,
}
