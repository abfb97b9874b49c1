//! Core persistence layer for the vaccine registry.
//! This crate owns the vaccine and vaccine type tables and their CRUD rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, ConstraintKind, DbError};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::vaccine::{Vaccine, VaccineDetail};
pub use model::vaccine_type::VaccineType;
pub use repo::error::{RepoError, RepoResult};
pub use repo::vaccine_repo::{SqliteVaccineIoOperations, VaccineIoOperations};
pub use repo::vaccine_type_repo::{SqliteVaccineTypeIoOperations, VaccineTypeIoOperations};
pub use service::vaccine_service::VaccineBrowserManager;
pub use service::vaccine_type_service::VaccineTypeBrowserManager;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
