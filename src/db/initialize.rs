use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it is missing. Idempotent.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clock_records (
            uuid      TEXT PRIMARY KEY NOT NULL,
            activity  INTEGER NOT NULL CHECK(activity IN (0, 1, 2)),
            action    INTEGER NOT NULL CHECK(action IN (0, 1)),
            timestamp TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_clock_records_timestamp
            ON clock_records(timestamp);
        CREATE INDEX IF NOT EXISTS idx_clock_records_activity_timestamp
            ON clock_records(activity, timestamp);

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
