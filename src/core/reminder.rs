use crate::models::{ReminderProgress, ServiceReminder};

/// Below this many km to go a reminder is shown as urgent.
pub const URGENT_THRESHOLD_KM: i64 = 1000;

pub fn reminder_progress(reminder: &ServiceReminder, last_odometer: u32) -> ReminderProgress {
    // may be negative when the last service is recorded past the odometer
    let since = i64::from(last_odometer) - i64::from(reminder.last_service_odometer);
    let interval = i64::from(reminder.interval);
    let remaining = interval - since;

    let progress_percent = if interval == 0 {
        if since >= 0 { 100.0 } else { 0.0 }
    } else {
        (since as f64 / interval as f64 * 100.0).clamp(0.0, 100.0)
    };

    ReminderProgress {
        reminder_id: reminder.id.clone(),
        name: reminder.name.clone(),
        distance_since_service: since,
        remaining: remaining.max(0),
        progress_percent,
        due_at: reminder.due_at(),
        urgent: remaining < URGENT_THRESHOLD_KM,
    }
}
