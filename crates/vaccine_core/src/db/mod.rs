//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the vaccine registry.
//! - Apply schema migrations in deterministic order.
//! - Classify SQLite constraint failures so repositories can surface
//!   semantic errors.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write registry data before migrations succeed.

use rusqlite::ffi;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Kind of storage constraint rejected by SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Primary key collision.
    PrimaryKey,
    /// Column `CHECK` (length limits).
    Check,
    /// Dangling or still-referenced foreign key.
    ForeignKey,
    /// Required column bound to NULL.
    NotNull,
    /// Any other `SQLITE_CONSTRAINT_*` code.
    Other,
}

/// Returns the constraint kind when `err` is a SQLite constraint failure.
pub fn constraint_violation(err: &rusqlite::Error) -> Option<ConstraintKind> {
    let rusqlite::Error::SqliteFailure(inner, _) = err else {
        return None;
    };
    if inner.code != rusqlite::ErrorCode::ConstraintViolation {
        return None;
    }

    let kind = match inner.extended_code {
        ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
            ConstraintKind::PrimaryKey
        }
        ffi::SQLITE_CONSTRAINT_CHECK => ConstraintKind::Check,
        ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintKind::ForeignKey,
        ffi::SQLITE_CONSTRAINT_NOTNULL => ConstraintKind::NotNull,
        _ => ConstraintKind::Other,
    };
    Some(kind)
}
