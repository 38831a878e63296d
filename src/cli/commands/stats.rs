use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Logbook;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::today;
use crate::utils::{format_km, format_money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let book = Logbook::load(SqliteStore::new(&pool.conn))?;
        let stats = book.stats(today());

        if *json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        header(format!(
            "Statistics • {} {}",
            stats.current_month_name, stats.current_year
        ));
        println!("{}• Trips:{} {}", CYAN, RESET, stats.trip_count);
        println!(
            "{}• Total distance:{} {} km",
            CYAN,
            RESET,
            format_km(stats.total_distance as i64)
        );
        println!(
            "{}• This month:{} {} km",
            CYAN,
            RESET,
            format_km(stats.monthly_distance as i64)
        );
        println!(
            "{}• Average trip:{} {:.1} km",
            CYAN, RESET, stats.average_trip_distance
        );
        println!("{}• Total fuel:{} {:.2} L", CYAN, RESET, stats.total_fuel);
        println!(
            "{}• Total cost:{} {}",
            CYAN,
            RESET,
            format_money(stats.total_cost, &cfg.currency)
        );
    }

    Ok(())
}
