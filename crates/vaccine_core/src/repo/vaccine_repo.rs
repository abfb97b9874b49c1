//! Vaccine repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide strict CRUD and lookup APIs over the `vaccines` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `new_vaccine` never overwrites an existing row.
//! - `update_vaccine` never creates a row.
//! - Oversized fields are rejected by storage and reported as
//!   `RepoError::DataIntegrity`, also when the target code is missing.

use crate::model::vaccine::Vaccine;
use crate::repo::error::{map_write_error, RepoError, RepoResult};
use crate::repo::schema_check::{ensure_connection_ready, VACCINES_TABLE, VACCINE_TYPES_TABLE};
use log::{debug, warn};
use rusqlite::types::Value;
use rusqlite::{
    params, params_from_iter, Connection, OptionalExtension, Row, Transaction,
    TransactionBehavior,
};

const VACCINE_SELECT_SQL: &str = "SELECT
    code,
    description,
    vaccine_type_code
FROM vaccines";

/// Repository interface for vaccine CRUD operations.
pub trait VaccineIoOperations {
    /// Inserts a new vaccine and returns the persisted row.
    fn new_vaccine(&self, vaccine: &Vaccine) -> RepoResult<Vaccine>;
    /// Replaces description and type of the vaccine identified by `code`.
    fn update_vaccine(&self, vaccine: &Vaccine) -> RepoResult<Vaccine>;
    /// Removes the vaccine identified by `code`. Missing codes are a no-op.
    fn delete_vaccine(&self, vaccine: &Vaccine) -> RepoResult<bool>;
    /// Returns whether a vaccine with `code` exists.
    fn is_code_present(&self, code: &str) -> RepoResult<bool>;
    /// Point lookup by primary key.
    fn find_vaccine(&self, code: &str) -> RepoResult<Option<Vaccine>>;
    /// Lists vaccines ordered by description, optionally filtered by type.
    fn get_vaccines(&self, vaccine_type_code: Option<&str>) -> RepoResult<Vec<Vaccine>>;
}

/// SQLite-backed vaccine repository.
pub struct SqliteVaccineIoOperations<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteVaccineIoOperations<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[VACCINE_TYPES_TABLE, VACCINES_TABLE])?;
        Ok(Self { conn })
    }

    fn load_persisted(&self, code: &str) -> RepoResult<Vaccine> {
        self.find_vaccine(code)?.ok_or_else(|| {
            RepoError::InvalidData(format!("vaccine `{code}` missing right after write"))
        })
    }
}

impl VaccineIoOperations for SqliteVaccineIoOperations<'_> {
    fn new_vaccine(&self, vaccine: &Vaccine) -> RepoResult<Vaccine> {
        let inserted = self.conn.execute(
            "INSERT INTO vaccines (
                code,
                description,
                vaccine_type_code
            ) VALUES (?1, ?2, ?3);",
            params![
                vaccine.code.as_str(),
                vaccine.description.as_str(),
                vaccine.vaccine_type_code.as_str(),
            ],
        );

        if let Err(err) = inserted {
            let err = map_write_error(err, &vaccine.code);
            warn!(
                "event=vaccine_insert module=repo status=error code={} error={}",
                vaccine.code, err
            );
            return Err(err);
        }

        debug!(
            "event=vaccine_insert module=repo status=ok code={} type={}",
            vaccine.code, vaccine.vaccine_type_code
        );
        self.load_persisted(&vaccine.code)
    }

    fn update_vaccine(&self, vaccine: &Vaccine) -> RepoResult<Vaccine> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let existed = vaccine_exists(&tx, &vaccine.code)?;

        // Storage validates the full row even when the code is missing; the
        // transaction is rolled back on every error path.
        let written = tx.execute(
            "INSERT INTO vaccines (
                code,
                description,
                vaccine_type_code
            ) VALUES (?1, ?2, ?3)
            ON CONFLICT (code) DO UPDATE SET
                description = excluded.description,
                vaccine_type_code = excluded.vaccine_type_code;",
            params![
                vaccine.code.as_str(),
                vaccine.description.as_str(),
                vaccine.vaccine_type_code.as_str(),
            ],
        );

        if let Err(err) = written {
            let err = map_write_error(err, &vaccine.code);
            warn!(
                "event=vaccine_update module=repo status=error code={} error={}",
                vaccine.code, err
            );
            return Err(err);
        }

        if !existed {
            warn!(
                "event=vaccine_update module=repo status=error code={} error_code=not_found",
                vaccine.code
            );
            return Err(RepoError::NotFound(vaccine.code.clone()));
        }

        tx.commit()?;
        debug!(
            "event=vaccine_update module=repo status=ok code={}",
            vaccine.code
        );
        self.load_persisted(&vaccine.code)
    }

    fn delete_vaccine(&self, vaccine: &Vaccine) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM vaccines WHERE code = ?1;", [vaccine.code.as_str()])?;

        debug!(
            "event=vaccine_delete module=repo status=ok code={} removed={}",
            vaccine.code, removed
        );
        Ok(true)
    }

    fn is_code_present(&self, code: &str) -> RepoResult<bool> {
        vaccine_exists(self.conn, code)
    }

    fn find_vaccine(&self, code: &str) -> RepoResult<Option<Vaccine>> {
        let vaccine = self
            .conn
            .query_row(
                &format!("{VACCINE_SELECT_SQL} WHERE code = ?1;"),
                [code],
                parse_vaccine_row,
            )
            .optional()?;
        Ok(vaccine)
    }

    fn get_vaccines(&self, vaccine_type_code: Option<&str>) -> RepoResult<Vec<Vaccine>> {
        let mut sql = VACCINE_SELECT_SQL.to_string();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(type_code) = vaccine_type_code {
            sql.push_str(" WHERE vaccine_type_code = ?");
            bind_values.push(Value::Text(type_code.to_string()));
        }
        sql.push_str(" ORDER BY description ASC, code ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut vaccines = Vec::new();
        while let Some(row) = rows.next()? {
            vaccines.push(parse_vaccine_row(row)?);
        }

        Ok(vaccines)
    }
}

fn vaccine_exists(conn: &Connection, code: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM vaccines WHERE code = ?1);",
        [code],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn parse_vaccine_row(row: &Row<'_>) -> rusqlite::Result<Vaccine> {
    Ok(Vaccine {
        code: row.get("code")?,
        description: row.get("description")?,
        vaccine_type_code: row.get("vaccine_type_code")?,
    })
}
