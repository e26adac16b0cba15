//! Address use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Offer the read-compare-write flow for callers that only want to issue
//!   an update when it would change something.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Service layer remains storage-agnostic.

use crate::model::address::{AddressFields, AddressId, AddressRecord};
use crate::repo::address_repo::{AddressRepository, RepoResult};

/// Use-case service wrapper for address CRUD operations.
pub struct AddressService<R: AddressRepository> {
    repo: R,
}

/// Result of a conditional update.
///
/// Distinguishes "nothing changed because the values were already equal"
/// from "nothing changed because the id does not exist" — the raw row count
/// alone cannot tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No row exists for the id; no write was issued.
    NotFound,
    /// The stored fields already equal the proposed ones; no write was
    /// issued.
    Unchanged,
    /// The update ran; carries the raw affected-row count.
    Applied(usize),
}

impl<R: AddressRepository> AddressService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a new address and returns the storage-assigned id.
    pub fn create(&self, fields: &AddressFields) -> RepoResult<AddressId> {
        self.repo.create(fields)
    }

    /// Fetches one address by id.
    pub fn get(&self, id: AddressId) -> RepoResult<Option<AddressRecord>> {
        self.repo.get(id)
    }

    /// Overwrites an address unconditionally. Returns the raw row count.
    pub fn update(&self, id: AddressId, fields: &AddressFields) -> RepoResult<usize> {
        self.repo.update(id, fields)
    }

    /// Deletes an address by id. Returns the raw row count.
    pub fn delete(&self, id: AddressId) -> RepoResult<usize> {
        self.repo.delete(id)
    }

    /// Updates only when the proposed fields differ from the stored ones.
    ///
    /// # Contract
    /// - Reads the current row first; absent id short-circuits to
    ///   `UpdateOutcome::NotFound` without writing.
    /// - Equal field sets short-circuit to `UpdateOutcome::Unchanged`
    ///   without writing.
    /// - Otherwise issues the full-field update and reports the row count.
    pub fn update_if_changed(
        &self,
        id: AddressId,
        fields: &AddressFields,
    ) -> RepoResult<UpdateOutcome> {
        let current = match self.repo.get(id)? {
            Some(record) => record,
            None => return Ok(UpdateOutcome::NotFound),
        };

        if !fields.would_update(&current) {
            return Ok(UpdateOutcome::Unchanged);
        }

        let changed = self.repo.update(id, fields)?;
        Ok(UpdateOutcome::Applied(changed))
    }
}
