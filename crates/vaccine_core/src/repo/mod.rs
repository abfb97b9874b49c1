//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the CRUD contracts (`*IoOperations`) for registry tables.
//! - Isolate SQLite query details from manager orchestration.
//!
//! # Invariants
//! - Inserts are strict: an existing code is a `DuplicateKey` error.
//! - Updates are strict: a missing code is a `NotFound` error.
//! - Length limits are enforced by storage and surface as `DataIntegrity`.
//! - "No match" on reads is `None` or an empty list, never an error.

pub mod error;
mod schema_check;
pub mod vaccine_repo;
pub mod vaccine_type_repo;
