use crate::utils::date::{serde_date, serde_time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A finished journey. Never edited after creation; removed only by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    #[serde(with = "serde_date")]
    pub date: NaiveDate,
    #[serde(with = "serde_time")]
    pub start_time: NaiveTime,
    #[serde(with = "serde_time")]
    pub end_time: NaiveTime,
    pub distance_km: u32,
    pub fuel_price_at_time: f64,  // EUR/L snapshot
    pub consumption_at_time: f64, // L/100km snapshot
    pub total_cost: f64,
    pub fuel_consumed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub start_odometer: u32,
    pub end_odometer: u32,
}

impl Trip {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_range(&self) -> String {
        format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

/// The journey currently being driven.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTrip {
    #[serde(with = "serde_date")]
    pub start_date: NaiveDate,
    #[serde(with = "serde_time")]
    pub start_time: NaiveTime,
    pub start_odometer: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ActiveTrip {
    pub fn started_at(&self) -> String {
        format!(
            "{} {}",
            self.start_date.format("%Y-%m-%d"),
            self.start_time.format("%H:%M")
        )
    }
}

/// The "current trip" slot: either nothing is being driven or exactly one
/// trip is in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TripSlot {
    #[default]
    Idle,
    InProgress(ActiveTrip),
}

impl TripSlot {
    pub fn active(&self) -> Option<&ActiveTrip> {
        match self {
            TripSlot::Idle => None,
            TripSlot::InProgress(active) => Some(active),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TripSlot::Idle)
    }
}

impl From<Option<ActiveTrip>> for TripSlot {
    fn from(value: Option<ActiveTrip>) -> Self {
        value.map_or(TripSlot::Idle, TripSlot::InProgress)
    }
}
