use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema. Safe to call on every startup
/// (idempotent).
///
/// The partial unique index is the hard guarantee behind "at most one OPEN
/// shift per user": even if two clock-in events race past the
/// check-before-insert, the second insert fails at the SQLite level.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id   TEXT NOT NULL,
            username  TEXT NOT NULL,
            clock_in  TEXT NOT NULL,
            clock_out TEXT
        );
        CREATE UNIQUE INDEX IF NOT EXISTS uq_shifts_open
            ON shifts(user_id) WHERE clock_out IS NULL;
        CREATE INDEX IF NOT EXISTS idx_shifts_user
            ON shifts(user_id, clock_out DESC);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
