//! Lazily opened SQLite handle.
//!
//! # Responsibility
//! - Defer connection opening to first use with an idempotent guard.
//! - Bootstrap every opened connection (pragmas, busy timeout, schema).
//!
//! # Invariants
//! - `ensure_open` either returns the one cached connection or opens it;
//!   it never opens twice.
//! - A failed open caches nothing, so the next call retries from scratch.
//! - Construction performs no I/O; a file-backed handle touches the
//!   filesystem only on first use.

use super::DbResult;
use log::{error, info};
use once_cell::unsync::OnceCell;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const SCHEMA_SQL: &str = include_str!("schema.sql");
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

enum Source {
    File(PathBuf),
    Memory,
}

impl Source {
    fn mode(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory => "memory",
        }
    }
}

/// Storage handle with caller-owned lifecycle.
///
/// The handle is constructed closed and opened on first use by any
/// repository operation. It is deliberately not `Sync`: one handle serves
/// one logical thread of use, and callers wanting concurrency provision one
/// handle per unit of work.
pub struct Database {
    source: Source,
    conn: OnceCell<Connection>,
}

impl Database {
    /// Creates a handle for a database file at `path`.
    ///
    /// Performs no I/O; the file is created/opened on first use.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
            conn: OnceCell::new(),
        }
    }

    /// Creates a handle for an in-memory database.
    pub fn in_memory() -> Self {
        Self {
            source: Source::Memory,
            conn: OnceCell::new(),
        }
    }

    /// Returns whether the underlying connection has been opened.
    pub fn is_open(&self) -> bool {
        self.conn.get().is_some()
    }

    /// Idempotent ensure-open guard.
    ///
    /// The first call opens and bootstraps the connection; every later call
    /// returns the cached handle untouched. Invoked at the top of every
    /// repository operation so that any operation can be the first.
    ///
    /// # Errors
    /// - Open and bootstrap failures propagate unmodified; nothing is
    ///   cached on failure.
    pub fn ensure_open(&self) -> DbResult<&Connection> {
        self.conn.get_or_try_init(|| open_connection(&self.source))
    }
}

fn open_connection(source: &Source) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = source.mode();
    info!("event=db_open module=db status=start mode={mode}");

    let result = match source {
        Source::File(path) => Connection::open(path),
        Source::Memory => Connection::open_in_memory(),
    };
    let conn = match result {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    // Schema presence, not schema migration: the DDL is idempotent and
    // carries no version bookkeeping.
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
