use serde::Serialize;

/// Aggregates derived from the trip collection. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total_distance: u64,
    pub monthly_distance: u64,
    pub current_month_name: String,
    pub current_year: i32,
    pub total_cost: f64,
    pub total_fuel: f64,
    pub average_trip_distance: f64,
    pub trip_count: usize,
}
