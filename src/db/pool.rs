//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One `DbPool` is opened per invocation and handed down explicitly; the
//! connection closes when it is dropped.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::utils::clock::{Clock, SystemClock};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    clock: Box<dyn Clock>,
}

impl DbPool {
    /// Open (or create) the database at `path` and make sure the schema exists.
    pub fn new(path: &str) -> AppResult<Self> {
        let path_ref = Path::new(path);
        if let Some(parent) = path_ref.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path_ref)?;
        tracing::debug!(path, "opened clock database");
        Self::from_conn(conn)
    }

    /// In-memory database, destroyed when the pool is dropped.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_conn(Connection::open_in_memory()?)
    }

    fn from_conn(conn: Connection) -> AppResult<Self> {
        init_db(&conn)?;
        Ok(Self {
            conn,
            clock: Box::new(SystemClock),
        })
    }

    /// Replace the clock used to stamp new records.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
