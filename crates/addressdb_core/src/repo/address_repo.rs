//! Address repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the CRUD API over the `addresses` table.
//! - Map between rows and the domain record, including NULL handling for
//!   the optional street line.
//!
//! # Invariants
//! - All statements are parameterized; no value is ever concatenated into
//!   SQL text.
//! - `create` retrieves the generated key in the same round trip as the
//!   insert, via a RETURNING clause.
//! - `update` rewrites all six fields and `modified_date`, never
//!   `row_guid`.
//! - `update`/`delete` surface the raw affected-row count; anything besides
//!   0 or 1 signals a storage-layer integrity problem and is the caller's
//!   to judge.
//! - One store per connection handle, one operation in flight at a time;
//!   the handle is not `Sync`, so this is enforced at compile time.

use crate::db::{Database, DbError};
use crate::model::address::{AddressFields, AddressId, AddressRecord};
use chrono::{Local, NaiveDate};
use rusqlite::{params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ADDRESS_SELECT_SQL: &str = "SELECT
    id,
    address_line1,
    address_line2,
    city,
    state_province,
    country_region,
    postal_code,
    row_guid,
    modified_date
FROM addresses";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for address persistence operations.
///
/// Not-found is deliberately absent: `get` reports it as `None` and
/// `update`/`delete` as a zero row count.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted address data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for address CRUD operations.
pub trait AddressRepository {
    /// Inserts a new row and returns the storage-assigned id.
    ///
    /// Generates a fresh `row_guid` and stamps `modified_date` with the
    /// current date. Returns the reserved zero id when the engine accepts
    /// the insert without yielding a key row; callers must treat zero as a
    /// failure signal.
    fn create(&self, fields: &AddressFields) -> RepoResult<AddressId>;

    /// Fetches one row by id, or `None` when no row matches.
    fn get(&self, id: AddressId) -> RepoResult<Option<AddressRecord>>;

    /// Overwrites all six fields and `modified_date` by id, unconditionally.
    ///
    /// Returns the raw affected-row count: 0 when the id does not exist,
    /// 1 on normal success.
    fn update(&self, id: AddressId, fields: &AddressFields) -> RepoResult<usize>;

    /// Deletes one row by id and returns the raw affected-row count.
    fn delete(&self, id: AddressId) -> RepoResult<usize>;
}

/// SQLite-backed address repository over a shared lazily-opened handle.
pub struct SqliteAddressRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteAddressRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl AddressRepository for SqliteAddressRepository<'_> {
    fn create(&self, fields: &AddressFields) -> RepoResult<AddressId> {
        let conn = self.db.ensure_open()?;

        let row_guid = Uuid::new_v4();
        let result = conn.query_row(
            "INSERT INTO addresses (
                address_line1,
                address_line2,
                city,
                state_province,
                country_region,
                postal_code,
                row_guid,
                modified_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING id;",
            params![
                fields.address_line1,
                fields.address_line2.as_deref(),
                fields.city,
                fields.state_province,
                fields.country_region,
                fields.postal_code,
                row_guid.to_string(),
                current_date(),
            ],
            |row| row.get::<_, AddressId>(0),
        );

        match result {
            Ok(id) => Ok(id),
            // Insert accepted without a key row: surface the reserved
            // zero-id failure signal.
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(err) => Err(err.into()),
        }
    }

    fn get(&self, id: AddressId) -> RepoResult<Option<AddressRecord>> {
        let conn = self.db.ensure_open()?;

        let mut stmt = conn.prepare(&format!("{ADDRESS_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_address_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, id: AddressId, fields: &AddressFields) -> RepoResult<usize> {
        let conn = self.db.ensure_open()?;

        let changed = conn.execute(
            "UPDATE addresses
             SET
                address_line1 = ?1,
                address_line2 = ?2,
                city = ?3,
                state_province = ?4,
                country_region = ?5,
                postal_code = ?6,
                modified_date = ?7
             WHERE id = ?8;",
            params![
                fields.address_line1,
                fields.address_line2.as_deref(),
                fields.city,
                fields.state_province,
                fields.country_region,
                fields.postal_code,
                current_date(),
                id,
            ],
        )?;

        Ok(changed)
    }

    fn delete(&self, id: AddressId) -> RepoResult<usize> {
        let conn = self.db.ensure_open()?;

        let changed = conn.execute("DELETE FROM addresses WHERE id = ?1;", params![id])?;

        Ok(changed)
    }
}

fn parse_address_row(row: &Row<'_>) -> RepoResult<AddressRecord> {
    let guid_text: String = row.get("row_guid")?;
    let row_guid = Uuid::parse_str(&guid_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{guid_text}` in addresses.row_guid"
        ))
    })?;

    Ok(AddressRecord {
        id: row.get("id")?,
        fields: AddressFields {
            address_line1: row.get("address_line1")?,
            address_line2: row.get("address_line2")?,
            city: row.get("city")?,
            state_province: row.get("state_province")?,
            country_region: row.get("country_region")?,
            postal_code: row.get("postal_code")?,
        },
        row_guid,
        modified_date: row.get("modified_date")?,
    })
}

/// Current local calendar date with the time-of-day discarded.
fn current_date() -> NaiveDate {
    Local::now().date_naive()
}
