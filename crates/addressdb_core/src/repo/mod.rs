//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract for the address table.
//! - Isolate SQLite statement details from service orchestration.
//!
//! # Invariants
//! - Every operation runs the ensure-open guard before touching storage.
//! - Absent rows are results (`None`, count 0), never errors.

pub mod address_repo;
