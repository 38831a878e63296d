use crate::cli::parser::{Commands, ReminderAction};
use crate::config::Config;
use crate::core::{Logbook, ReminderField};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::storage::{KeyValueStore, SqliteStore};
use crate::ui::messages::{info, success};
use crate::utils::colors::{RESET, color_for_reminder};
use crate::utils::format_km;

fn field_updates(
    name: &Option<String>,
    interval: &Option<u32>,
    last_service: &Option<u32>,
) -> Vec<ReminderField> {
    let mut out = Vec::new();
    if let Some(n) = name {
        out.push(ReminderField::Name(n.clone()));
    }
    if let Some(i) = interval {
        out.push(ReminderField::Interval(*i));
    }
    if let Some(o) = last_service {
        out.push(ReminderField::LastServiceOdometer(*o));
    }
    out
}

fn apply_fields<S: KeyValueStore>(
    book: &mut Logbook<S>,
    id: &str,
    fields: Vec<ReminderField>,
) -> AppResult<()> {
    for f in fields {
        if !book.update_reminder(id, f)? {
            return Err(AppError::ReminderNotFound(id.to_string()));
        }
    }
    Ok(())
}

fn print_reminders<S: KeyValueStore>(book: &Logbook<S>) {
    let progress = book.reminder_progress();
    if progress.is_empty() {
        info("No service reminders.");
        return;
    }

    for p in progress {
        println!(
            "{} | {:<24} | {}{:>5.1}%{} | {} km to go | due at {} km",
            p.reminder_id,
            p.name,
            color_for_reminder(p.urgent),
            p.progress_percent,
            RESET,
            format_km(p.remaining),
            format_km(p.due_at as i64)
        );
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reminder { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut book = Logbook::load(SqliteStore::new(&pool.conn))?;

        match action {
            ReminderAction::List => print_reminders(&book),

            ReminderAction::Add {
                name,
                interval,
                last_service,
            } => {
                let id = book.add_reminder()?;
                apply_fields(&mut book, &id, field_updates(name, interval, last_service))?;
                audit(&pool.conn, "reminder_add", &id, "Service reminder added");
                success(format!("Service reminder added: {}", id));
            }

            ReminderAction::Set {
                id,
                name,
                interval,
                last_service,
            } => {
                if book.settings().reminder(id).is_none() {
                    return Err(AppError::ReminderNotFound(id.clone()));
                }
                apply_fields(&mut book, id, field_updates(name, interval, last_service))?;
                audit(&pool.conn, "reminder_set", id, "Service reminder updated");
                success(format!("Service reminder {} updated.", id));
            }

            ReminderAction::Del { id } => {
                if book.delete_reminder(id)? {
                    audit(&pool.conn, "reminder_del", id, "Service reminder deleted");
                    success(format!("Service reminder {} deleted.", id));
                } else {
                    info(format!("No reminder with id {}; nothing deleted.", id));
                }
            }
        }
    }

    Ok(())
}
