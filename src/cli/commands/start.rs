use crate::cli::parser::Commands;
use crate::cli::commands::{date_or, time_or_now};
use crate::config::Config;
use crate::core::Logbook;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::success;
use crate::utils::date::today;
use crate::utils::format_km;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        odo,
        date,
        time,
        note,
    } = cmd
    {
        let d = date_or(date, today())?;
        let t = time_or_now(time)?;

        let pool = DbPool::new(&cfg.database)?;
        let mut book = Logbook::load(SqliteStore::new(&pool.conn))?;

        // continue from where the last trip ended
        let start_odometer = odo.unwrap_or_else(|| book.last_odometer());

        let active = book.start_trip(start_odometer, d, t, note.clone())?;
        let started = active.started_at();

        audit(
            &pool.conn,
            "start",
            &started,
            &format!("Trip started at {} km", start_odometer),
        );

        success(format!(
            "Trip started {} at {} km",
            started,
            format_km(i64::from(start_odometer))
        ));
    }

    Ok(())
}
