use crate::errors::{AppError, AppResult};
use crate::models::{ActiveTrip, AppSettings, Trip, TripSlot};
use chrono::{NaiveDate, NaiveTime};

impl TripSlot {
    /// Idle -> InProgress. A second start while a trip runs is refused.
    pub fn start(&mut self, active: ActiveTrip) -> AppResult<()> {
        if let TripSlot::InProgress(current) = self {
            return Err(AppError::TripAlreadyActive(current.started_at()));
        }
        *self = TripSlot::InProgress(active);
        Ok(())
    }

    /// InProgress -> Idle, handing back the trip that was running.
    pub fn take(&mut self) -> AppResult<ActiveTrip> {
        match std::mem::take(self) {
            TripSlot::InProgress(active) => Ok(active),
            TripSlot::Idle => Err(AppError::NoActiveTrip),
        }
    }
}

/// Turn the running trip into a finished one, pricing it with the
/// settings in force right now.
pub fn complete_trip(
    id: String,
    active: &ActiveTrip,
    end_odometer: u32,
    end_time: NaiveTime,
    date: NaiveDate,
    settings: &AppSettings,
) -> AppResult<Trip> {
    if end_odometer < active.start_odometer {
        return Err(AppError::OdometerRegression {
            start: active.start_odometer,
            end: end_odometer,
        });
    }

    let distance_km = end_odometer - active.start_odometer;
    let fuel_consumed = f64::from(distance_km) * settings.average_consumption / 100.0;
    let total_cost = fuel_consumed * settings.fuel_price;

    Ok(Trip {
        id,
        date,
        start_time: active.start_time,
        end_time,
        distance_km,
        fuel_price_at_time: settings.fuel_price,
        consumption_at_time: settings.average_consumption,
        total_cost,
        fuel_consumed,
        note: active.note.clone(),
        start_odometer: active.start_odometer,
        end_odometer,
    })
}

/// Newest first.
pub fn insert_trip(trips: &mut Vec<Trip>, trip: Trip) {
    trips.insert(0, trip);
}

/// Remove the trip with `id`; unknown ids leave the list untouched.
pub fn remove_trip(trips: &mut Vec<Trip>, id: &str) -> bool {
    match trips.iter().position(|t| t.id == id) {
        Some(idx) => {
            trips.remove(idx);
            true
        }
        None => false,
    }
}

/// End odometer of the most recent trip, or 0 for an empty logbook.
pub fn last_odometer(trips: &[Trip]) -> u32 {
    trips.first().map_or(0, |t| t.end_odometer)
}
