use crate::cli::commands::{date_or, time_or_now};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Logbook;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::storage::SqliteStore;
use crate::ui::messages::success;
use crate::utils::{format_km, format_money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Finish { odo, time, date } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut book = Logbook::load(SqliteStore::new(&pool.conn))?;

        let start_date = book
            .slot()
            .active()
            .map(|a| a.start_date)
            .ok_or(AppError::NoActiveTrip)?;

        let d = date_or(date, start_date)?;
        let t = time_or_now(time)?;

        let trip = book.finish_trip(*odo, t, d)?.clone();

        audit(
            &pool.conn,
            "finish",
            &trip.id,
            &format!(
                "{} km, {:.2} L, {:.2}",
                trip.distance_km, trip.fuel_consumed, trip.total_cost
            ),
        );

        success(format!(
            "Trip recorded: {} km ({} → {}), {:.1} L, {}",
            format_km(i64::from(trip.distance_km)),
            format_km(i64::from(trip.start_odometer)),
            format_km(i64::from(trip.end_odometer)),
            trip.fuel_consumed,
            format_money(trip.total_cost, &cfg.currency)
        ));
        println!("Trip id: {}", trip.id);
    }

    Ok(())
}
