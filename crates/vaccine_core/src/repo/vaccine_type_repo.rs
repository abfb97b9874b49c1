//! Vaccine type repository contract and SQLite implementation.
//!
//! # Invariants
//! - Same strict insert/update semantics as the vaccine repository.
//! - A type still referenced by a vaccine cannot be deleted; storage reports
//!   a foreign key violation, surfaced as `RepoError::DataIntegrity`.

use crate::model::vaccine_type::VaccineType;
use crate::repo::error::{map_write_error, RepoError, RepoResult};
use crate::repo::schema_check::{ensure_connection_ready, VACCINE_TYPES_TABLE};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

/// Repository interface for vaccine type CRUD operations.
pub trait VaccineTypeIoOperations {
    fn new_vaccine_type(&self, vaccine_type: &VaccineType) -> RepoResult<VaccineType>;
    fn update_vaccine_type(&self, vaccine_type: &VaccineType) -> RepoResult<VaccineType>;
    fn delete_vaccine_type(&self, vaccine_type: &VaccineType) -> RepoResult<bool>;
    fn is_code_present(&self, code: &str) -> RepoResult<bool>;
    fn find_vaccine_type(&self, code: &str) -> RepoResult<Option<VaccineType>>;
    /// Lists all types ordered by description.
    fn get_vaccine_types(&self) -> RepoResult<Vec<VaccineType>>;
}

/// SQLite-backed vaccine type repository.
pub struct SqliteVaccineTypeIoOperations<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteVaccineTypeIoOperations<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[VACCINE_TYPES_TABLE])?;
        Ok(Self { conn })
    }

    fn load_persisted(&self, code: &str) -> RepoResult<VaccineType> {
        self.find_vaccine_type(code)?.ok_or_else(|| {
            RepoError::InvalidData(format!("vaccine type `{code}` missing right after write"))
        })
    }
}

impl VaccineTypeIoOperations for SqliteVaccineTypeIoOperations<'_> {
    fn new_vaccine_type(&self, vaccine_type: &VaccineType) -> RepoResult<VaccineType> {
        self.conn
            .execute(
                "INSERT INTO vaccine_types (code, description) VALUES (?1, ?2);",
                params![vaccine_type.code.as_str(), vaccine_type.description.as_str()],
            )
            .map_err(|err| {
                let err = map_write_error(err, &vaccine_type.code);
                warn!(
                    "event=vaccine_type_insert module=repo status=error code={} error={}",
                    vaccine_type.code, err
                );
                err
            })?;

        debug!(
            "event=vaccine_type_insert module=repo status=ok code={}",
            vaccine_type.code
        );
        self.load_persisted(&vaccine_type.code)
    }

    fn update_vaccine_type(&self, vaccine_type: &VaccineType) -> RepoResult<VaccineType> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let existed = vaccine_type_exists(&tx, &vaccine_type.code)?;

        tx.execute(
            "INSERT INTO vaccine_types (code, description) VALUES (?1, ?2)
             ON CONFLICT (code) DO UPDATE SET description = excluded.description;",
            params![vaccine_type.code.as_str(), vaccine_type.description.as_str()],
        )
        .map_err(|err| {
            let err = map_write_error(err, &vaccine_type.code);
            warn!(
                "event=vaccine_type_update module=repo status=error code={} error={}",
                vaccine_type.code, err
            );
            err
        })?;

        if !existed {
            warn!(
                "event=vaccine_type_update module=repo status=error code={} error_code=not_found",
                vaccine_type.code
            );
            return Err(RepoError::NotFound(vaccine_type.code.clone()));
        }

        tx.commit()?;
        debug!(
            "event=vaccine_type_update module=repo status=ok code={}",
            vaccine_type.code
        );
        self.load_persisted(&vaccine_type.code)
    }

    fn delete_vaccine_type(&self, vaccine_type: &VaccineType) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute(
                "DELETE FROM vaccine_types WHERE code = ?1;",
                [vaccine_type.code.as_str()],
            )
            .map_err(|err| {
                let err = map_write_error(err, &vaccine_type.code);
                warn!(
                    "event=vaccine_type_delete module=repo status=error code={} error={}",
                    vaccine_type.code, err
                );
                err
            })?;

        debug!(
            "event=vaccine_type_delete module=repo status=ok code={} removed={}",
            vaccine_type.code, removed
        );
        Ok(true)
    }

    fn is_code_present(&self, code: &str) -> RepoResult<bool> {
        vaccine_type_exists(self.conn, code)
    }

    fn find_vaccine_type(&self, code: &str) -> RepoResult<Option<VaccineType>> {
        let vaccine_type = self
            .conn
            .query_row(
                "SELECT code, description FROM vaccine_types WHERE code = ?1;",
                [code],
                parse_vaccine_type_row,
            )
            .optional()?;
        Ok(vaccine_type)
    }

    fn get_vaccine_types(&self) -> RepoResult<Vec<VaccineType>> {
        let mut stmt = self.conn.prepare(
            "SELECT code, description
             FROM vaccine_types
             ORDER BY description ASC, code ASC;",
        )?;
        let types = stmt
            .query_map([], parse_vaccine_type_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(types)
    }
}

fn vaccine_type_exists(conn: &Connection, code: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM vaccine_types WHERE code = ?1);",
        [code],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn parse_vaccine_type_row(row: &Row<'_>) -> rusqlite::Result<VaccineType> {
    Ok(VaccineType {
        code: row.get("code")?,
        description: row.get("description")?,
    })
}
