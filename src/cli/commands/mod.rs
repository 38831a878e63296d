pub mod cancel;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod finish;
pub mod init;
pub mod list;
pub mod log;
pub mod reminder;
pub mod settings;
pub mod start;
pub mod stats;
pub mod status;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Trip;
use crate::ui::messages::warning;
use crate::utils::date::{now_time, parse_date, parse_time};
use crate::utils::{format_km, format_money, pad_right};
use chrono::{NaiveDate, NaiveTime};
use std::io::{self, Write};

/// Parse an optional `--date`, falling back to `default`.
pub(crate) fn date_or(arg: &Option<String>, default: NaiveDate) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(default),
    }
}

/// Parse an optional `--time`, falling back to the current minute.
pub(crate) fn time_or_now(arg: &Option<String>) -> AppResult<NaiveTime> {
    match arg {
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone())),
        None => Ok(now_time()),
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// One trip per line, shared by `list` and `status`.
pub(crate) fn print_trip_row(trip: &Trip, cfg: &Config) {
    let note = trip.note.as_deref().unwrap_or("");
    println!(
        "{} {} {} | {:>9} km | {:>10} | {:>6.1} L | {} {} {} | {}",
        trip.id,
        trip.date_str(),
        trip.time_range(),
        format_km(i64::from(trip.distance_km)),
        format_money(trip.total_cost, &cfg.currency),
        trip.fuel_consumed,
        format_km(i64::from(trip.start_odometer)),
        cfg.separator_char,
        format_km(i64::from(trip.end_odometer)),
        pad_right(note, 20),
    );
}
