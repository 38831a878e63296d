use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Logbook;
use crate::db::info::print_db_info;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info: show_info } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if !*show_info {
            info("Nothing to do. Use --info to show database information.");
            return Ok(());
        }

        let trips = Logbook::load(SqliteStore::new(&pool.conn))?
            .trips()
            .to_vec();
        print_db_info(&pool, &trips)?;
    }

    Ok(())
}
