use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_LABEL: usize = 48;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    match RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// ANSI colour by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Cyan,
        "finish" => Colour::Green,
        "cancel" | "del" | "reminder_del" => Colour::Red,
        "settings" | "reminder_add" | "reminder_set" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do. Use --print to show the internal log.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for r in rows {
            let label = if r.target.is_empty() {
                color_for_operation(&r.operation).paint(r.operation.as_str()).to_string()
            } else {
                format!(
                    "{} ({})",
                    color_for_operation(&r.operation).paint(r.operation.as_str()),
                    r.target
                )
            };

            // width is measured on the visible text only
            let visible = strip_ansi(&label);
            let shown = if visible.chars().count() > MAX_LABEL {
                let cut: String = visible.chars().take(MAX_LABEL - 3).collect();
                format!("{}...", cut)
            } else {
                label
            };
            let padding = " ".repeat(MAX_LABEL.saturating_sub(strip_ansi(&shown).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                r.id,
                r.date,
                shown,
                padding,
                r.message,
                id_w = id_w,
                date_w = date_w
            );
        }
    }

    Ok(())
}
