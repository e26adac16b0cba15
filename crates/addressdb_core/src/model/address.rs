//! Address domain model.
//!
//! # Responsibility
//! - Define the user-supplied field set and the persisted record shape.
//! - Provide the projection and change-detection helpers callers use to
//!   decide whether an update is worth issuing.
//!
//! # Invariants
//! - `address_line2 = None` means SQL NULL; `Some("")` is a present empty
//!   string. The two are never conflated.
//! - `modified_date` carries a calendar date only, no time-of-day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage-assigned primary key for an address row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// The value `0` is reserved as a failure signal from `create` and is never
/// a valid key.
pub type AddressId = i64;

/// The six user-supplied address attributes, independent of identity and
/// audit metadata.
///
/// No field-level format validation happens in this layer; empty strings are
/// accepted and passed through. Storage enforces its own NOT NULL
/// constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    /// First street line. Required by storage.
    pub address_line1: String,
    /// Second street line. `None` maps to SQL NULL.
    pub address_line2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub country_region: String,
    pub postal_code: String,
}

/// A persisted address row: the field set plus storage-assigned identity
/// and audit columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Primary key, assigned by storage at insert. Sole lookup key.
    pub id: AddressId,
    #[serde(flatten)]
    pub fields: AddressFields,
    /// Generated once at creation. Updates never rewrite it.
    pub row_guid: Uuid,
    /// Date of the last successful create or update. No time component.
    pub modified_date: NaiveDate,
}

impl AddressFields {
    /// Projects a persisted record down to its field set, discarding
    /// identity and audit data.
    pub fn from_record(record: &AddressRecord) -> Self {
        record.fields.clone()
    }

    /// Returns whether writing `self` over `record` would change anything,
    /// i.e. at least one of the six fields differs.
    ///
    /// Pure structural comparison; issues no write itself.
    pub fn would_update(&self, record: &AddressRecord) -> bool {
        *self != Self::from_record(record)
    }
}
