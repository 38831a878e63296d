use crate::config::Config;
use crate::core::Logbook;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let mut book = Logbook::load(SqliteStore::new(&pool.conn))?;

    let active = book.cancel_trip()?;

    audit(
        &pool.conn,
        "cancel",
        &active.started_at(),
        &format!("Trip from {} km discarded", active.start_odometer),
    );

    success(format!("Trip started {} discarded.", active.started_at()));
    Ok(())
}
