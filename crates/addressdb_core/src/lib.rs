//! Data-access core for the address entity.
//! This crate is the single source of truth for the CRUD contract and the
//! connection-lifecycle policy.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{Database, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address::{AddressFields, AddressId, AddressRecord};
pub use repo::address_repo::{AddressRepository, RepoError, RepoResult, SqliteAddressRepository};
pub use service::address_service::{AddressService, UpdateOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
