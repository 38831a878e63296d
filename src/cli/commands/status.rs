use crate::cli::commands::print_trip_row;
use crate::config::Config;
use crate::core::Logbook;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::header;
use crate::utils::colors::{BOLD, GREY, RESET, color_for_reminder};
use crate::utils::date::today;
use crate::utils::format_km;
use crate::utils::formatting::progress_bar;

/// Handle the `status` command (dashboard).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let book = Logbook::load(SqliteStore::new(&pool.conn))?;
    let stats = book.stats(today());

    header(format!(
        "Monthly distance • {} {}",
        stats.current_month_name, stats.current_year
    ));
    println!(
        "{}{} km{}",
        BOLD,
        format_km(stats.monthly_distance as i64),
        RESET
    );

    let progress = book.reminder_progress();
    if !progress.is_empty() {
        header("Service reminders");
        for p in &progress {
            let color = color_for_reminder(p.urgent);
            let label = if p.name.is_empty() { "(unnamed)" } else { p.name.as_str() };
            println!(
                "{:<24} {}{}{} {} km to go {}(at {} km){}",
                label,
                color,
                progress_bar(p.progress_percent, 20),
                RESET,
                format_km(p.remaining),
                GREY,
                format_km(p.due_at as i64),
                RESET
            );
        }
    }

    if let Some(active) = book.slot().active() {
        header("Trip in progress");
        println!(
            "Started {} • {} km{}",
            active.started_at(),
            format_km(i64::from(active.start_odometer)),
            active
                .note
                .as_deref()
                .map(|n| format!(" • {}", n))
                .unwrap_or_default()
        );
    }

    header("Recent trips");
    if book.trips().is_empty() {
        println!("{}No trips recorded{}", GREY, RESET);
    } else {
        for trip in book.trips().iter().take(cfg.recent_trips) {
            print_trip_row(trip, cfg);
        }
    }

    Ok(())
}
