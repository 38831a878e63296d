use crate::cli::commands::print_trip_row;
use crate::config::Config;
use crate::core::Logbook;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let book = Logbook::load(SqliteStore::new(&pool.conn))?;

    if book.trips().is_empty() {
        info("No trips recorded.");
        return Ok(());
    }

    println!("TRIPS ({}):", book.trips().len());
    for trip in book.trips() {
        print_trip_row(trip, cfg);
    }

    Ok(())
}
