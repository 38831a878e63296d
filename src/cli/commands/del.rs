use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Logbook;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut book = Logbook::load(SqliteStore::new(&pool.conn))?;

        let Some(trip) = book.trips().iter().find(|t| &t.id == id) else {
            info(format!("No trip with id {}; nothing deleted.", id));
            return Ok(());
        };

        let prompt = format!(
            "Delete trip {} of {} ({} km)? This action is irreversible.",
            trip.id,
            trip.date_str(),
            trip.distance_km
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if book.delete_trip(id)? {
            audit(&pool.conn, "del", id, "Trip deleted");
            success(format!("Trip {} has been deleted.", id));
        }
    }

    Ok(())
}
