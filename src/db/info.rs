use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Trip;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, trips: &[Trip]) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    let keys: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM storage", [], |row| row.get(0))?;
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;

    println!("{}• Stored keys:{} {}", CYAN, RESET, keys);
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);
    println!(
        "{}• Total trips:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        trips.len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let first = trips.iter().map(|t| t.date).min();
    let last = trips.iter().map(|t| t.date).max();

    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) AVERAGE TRIPS/DAY
    //
    if let (Some(f), Some(l)) = (first, last) {
        let days = (l - f).num_days().max(1);
        let avg = trips.len() as f64 / days as f64;
        println!("{}• Average trips/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
