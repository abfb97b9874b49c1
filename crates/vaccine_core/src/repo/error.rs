//! Repository error taxonomy shared by registry repositories.

use crate::db::{constraint_violation, ConstraintKind, DbError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from registry repository and manager operations.
#[derive(Debug)]
pub enum RepoError {
    /// Write rejected by a storage constraint; nothing was persisted.
    DataIntegrity {
        constraint: ConstraintKind,
        message: String,
    },
    /// Insert targeted a code that already exists.
    DuplicateKey(String),
    /// Update targeted a code that does not exist.
    NotFound(String),
    /// Caller input rejected before reaching storage.
    Validation(String),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Returns whether storage rejected the write for a constraint.
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::DataIntegrity { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataIntegrity {
                constraint,
                message,
            } => write!(f, "data integrity violation ({constraint:?}): {message}"),
            Self::DuplicateKey(code) => write!(f, "code already in use: `{code}`"),
            Self::NotFound(code) => write!(f, "record not found: `{code}`"),
            Self::Validation(message) => write!(f, "invalid input: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "registry repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "registry repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "registry repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
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

/// Translates a failed write into the semantic repository error.
///
/// Primary key collisions become `DuplicateKey(code)`, every other
/// constraint failure becomes `DataIntegrity`, and anything else stays a
/// transport-level `Db` error.
pub(crate) fn map_write_error(err: rusqlite::Error, code: &str) -> RepoError {
    match constraint_violation(&err) {
        Some(ConstraintKind::PrimaryKey) => RepoError::DuplicateKey(code.to_string()),
        Some(constraint) => RepoError::DataIntegrity {
            constraint,
            message: err.to_string(),
        },
        None => RepoError::from(err),
    }
}
