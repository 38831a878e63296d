use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Logbook, SettingsForm};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::storage::SqliteStore;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        fuel_price,
        consumption,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let mut book = Logbook::load(SqliteStore::new(&pool.conn))?;

        if fuel_price.is_none() && consumption.is_none() {
            let s = book.settings();
            println!(
                "{}• Fuel price:{} {} {}/L",
                CYAN, RESET, s.fuel_price, cfg.currency
            );
            println!(
                "{}• Average consumption:{} {} L/100km",
                CYAN, RESET, s.average_consumption
            );
            println!(
                "{}• Service reminders:{} {}",
                CYAN,
                RESET,
                s.service_reminders.len()
            );
            return Ok(());
        }

        let form = SettingsForm {
            fuel_price: fuel_price.clone(),
            average_consumption: consumption.clone(),
        };

        match book.save_settings(&form) {
            Ok(()) => {
                let s = book.settings();
                audit(
                    &pool.conn,
                    "settings",
                    "",
                    &format!(
                        "fuel price {}, consumption {}",
                        s.fuel_price, s.average_consumption
                    ),
                );
                success(format!(
                    "Settings saved: {} {}/L, {} L/100km",
                    s.fuel_price, cfg.currency, s.average_consumption
                ));
            }
            Err(e @ AppError::InvalidNumber { .. }) => {
                warning(format!("{} - settings not saved", e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
