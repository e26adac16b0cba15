//! SQLite storage handle and connection bootstrap.
//!
//! # Responsibility
//! - Own the storage location and the lazily opened connection.
//! - Configure connection pragmas and ensure the schema exists before any
//!   repository statement runs.
//!
//! # Invariants
//! - Opened connections have `foreign_keys=ON` and the `addresses` table
//!   present.
//! - The handle only ever transitions closed -> open; release happens when
//!   the caller drops it.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::Database;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
