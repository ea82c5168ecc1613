use crate::db::models::DbClockRow;
use crate::errors::AppResult;
use crate::models::activity::Activity;
use crate::models::event::{ClockEvent, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_RECORDS: &str = "SELECT uuid, activity, action, timestamp FROM clock_records";

pub fn map_row(row: &Row) -> rusqlite::Result<DbClockRow> {
    Ok(DbClockRow {
        uuid: row.get("uuid")?,
        activity: row.get("activity")?,
        action: row.get("action")?,
        timestamp: row.get("timestamp")?,
    })
}

fn collect(rows: impl Iterator<Item = rusqlite::Result<DbClockRow>>) -> AppResult<Vec<ClockEvent>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?.decode()?);
    }
    Ok(out)
}

fn ts(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Latest record for `activity`. Ties on timestamp go to the last inserted row.
pub fn load_most_recent(conn: &Connection, activity: Activity) -> AppResult<Option<ClockEvent>> {
    let sql = format!(
        "{SELECT_RECORDS} WHERE activity = ?1 ORDER BY timestamp DESC, rowid DESC LIMIT 1"
    );
    let row = conn
        .query_row(&sql, [activity.to_db_code()], map_row)
        .optional()?;

    row.map(DbClockRow::decode).transpose()
}

/// Records with `start <= timestamp < end`, oldest first.
pub fn load_in_range(
    conn: &Connection,
    start: &NaiveDateTime,
    end: &NaiveDateTime,
) -> AppResult<Vec<ClockEvent>> {
    let sql = format!(
        "{SELECT_RECORDS} WHERE timestamp >= ?1 AND timestamp < ?2 ORDER BY timestamp ASC, rowid ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![ts(start), ts(end)], map_row)?;
    collect(rows)
}

/// Every record, oldest first. Positions shown to the user index this list.
pub fn load_all(conn: &Connection) -> AppResult<Vec<ClockEvent>> {
    let sql = format!("{SELECT_RECORDS} ORDER BY timestamp ASC, rowid ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;
    collect(rows)
}

pub fn load_by_uuid(conn: &Connection, uuid: &str) -> AppResult<Option<ClockEvent>> {
    let sql = format!("{SELECT_RECORDS} WHERE uuid = ?1");
    let row = conn.query_row(&sql, [uuid], map_row).optional()?;
    row.map(DbClockRow::decode).transpose()
}

pub fn insert_record(conn: &Connection, ev: &ClockEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO clock_records (uuid, activity, action, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            ev.id,
            ev.activity.to_db_code(),
            ev.action.to_db_code(),
            ev.timestamp_str(),
        ],
    )?;
    Ok(())
}

pub fn delete_record(conn: &Connection, uuid: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM clock_records WHERE uuid = ?1", [uuid])?)
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM clock_records", [])?)
}
