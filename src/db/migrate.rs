use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

type MigrationFn = fn(&Connection) -> rusqlite::Result<()>;

/// Ordered schema migrations: (version, description, action).
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[
    (
        "20250110_0001_create_storage",
        "Created storage table",
        create_storage_table,
    ),
    (
        "20250302_0002_index_log_operation",
        "Indexed log by operation",
        index_log_operation,
    ),
];

/// Ensure that the `log` table exists. It also records applied migrations,
/// so it is created outside the versioned list.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn create_storage_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
}

fn index_log_operation(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation, target);")
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations. Idempotent.
/// Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for (version, message, action) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        action(conn).map_err(|e| AppError::Migration(format!("{}: {}", version, e)))?;
        mark_applied(conn, version, message)?;
        applied.push(*version);
    }

    Ok(applied)
}
