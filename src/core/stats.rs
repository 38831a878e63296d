use crate::models::{HistoryStats, Trip};
use crate::utils::date::{month_label, same_month};
use chrono::{Datelike, NaiveDate};

/// Recomputed from scratch on every call.
pub fn compute_stats(trips: &[Trip], now: NaiveDate) -> HistoryStats {
    let total_distance: u64 = trips.iter().map(|t| u64::from(t.distance_km)).sum();
    let total_cost: f64 = trips.iter().map(|t| t.total_cost).sum();
    let total_fuel: f64 = trips.iter().map(|t| t.fuel_consumed).sum();

    let monthly_distance: u64 = trips
        .iter()
        .filter(|t| same_month(&t.date, &now))
        .map(|t| u64::from(t.distance_km))
        .sum();

    let average_trip_distance = if trips.is_empty() {
        0.0
    } else {
        total_distance as f64 / trips.len() as f64
    };

    HistoryStats {
        total_distance,
        monthly_distance,
        current_month_name: month_label(&now),
        current_year: now.year(),
        total_cost,
        total_fuel,
        average_trip_distance,
        trip_count: trips.len(),
    }
}
