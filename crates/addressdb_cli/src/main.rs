//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `addressdb_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("addressdb_core version={}", addressdb_core::core_version());
}
