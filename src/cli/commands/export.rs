use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Logbook;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::export_trips;
use crate::storage::SqliteStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let book = Logbook::load(SqliteStore::new(&pool.conn))?;

        let count = export_trips(book.trips(), *format, file, *force)?;
        if count > 0 {
            audit(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{} trips exported to {}", count, file),
            );
        }
    }

    Ok(())
}
