//! Vaccine use-case manager.
//!
//! # Responsibility
//! - Provide stable vaccine CRUD entry points for core callers.
//! - Resolve the referenced vaccine type explicitly at read time.
//!
//! # Invariants
//! - Manager APIs never bypass repository persistence contracts.
//! - Repository errors are returned unchanged; nothing is retried.

use crate::model::vaccine::{Vaccine, VaccineDetail};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::vaccine_repo::VaccineIoOperations;
use crate::repo::vaccine_type_repo::VaccineTypeIoOperations;
use crate::service::require_non_blank;

/// Caller-facing wrapper for vaccine CRUD operations.
pub struct VaccineBrowserManager<V: VaccineIoOperations, T: VaccineTypeIoOperations> {
    vaccines: V,
    vaccine_types: T,
}

impl<V: VaccineIoOperations, T: VaccineTypeIoOperations> VaccineBrowserManager<V, T> {
    /// Creates a manager over the provided repository implementations.
    pub fn new(vaccines: V, vaccine_types: T) -> Self {
        Self {
            vaccines,
            vaccine_types,
        }
    }

    /// Lists vaccines of one type, or all vaccines when `vaccine_type_code`
    /// is `None`, ordered by description.
    pub fn get_vaccines(&self, vaccine_type_code: Option<&str>) -> RepoResult<Vec<Vaccine>> {
        self.vaccines.get_vaccines(vaccine_type_code)
    }

    /// Inserts a new vaccine.
    ///
    /// # Errors
    /// - `Validation` for an empty code or description.
    /// - `DuplicateKey` when the code already exists.
    /// - `DataIntegrity` when storage rejects the row.
    pub fn new_vaccine(&self, vaccine: &Vaccine) -> RepoResult<Vaccine> {
        validate(vaccine)?;
        self.vaccines.new_vaccine(vaccine)
    }

    /// Updates an existing vaccine.
    ///
    /// Returns `NotFound` for a missing code and `DataIntegrity` when storage
    /// rejects the row.
    pub fn update_vaccine(&self, vaccine: &Vaccine) -> RepoResult<Vaccine> {
        validate(vaccine)?;
        self.vaccines.update_vaccine(vaccine)
    }

    pub fn delete_vaccine(&self, vaccine: &Vaccine) -> RepoResult<bool> {
        self.vaccines.delete_vaccine(vaccine)
    }

    pub fn is_code_present(&self, code: &str) -> RepoResult<bool> {
        self.vaccines.is_code_present(code)
    }

    pub fn find_vaccine(&self, code: &str) -> RepoResult<Option<Vaccine>> {
        self.vaccines.find_vaccine(code)
    }

    /// Looks up a vaccine and the type it references.
    ///
    /// A vaccine pointing at a missing type is reported as `InvalidData`.
    pub fn find_vaccine_detail(&self, code: &str) -> RepoResult<Option<VaccineDetail>> {
        let Some(vaccine) = self.vaccines.find_vaccine(code)? else {
            return Ok(None);
        };

        let vaccine_type = self
            .vaccine_types
            .find_vaccine_type(&vaccine.vaccine_type_code)?
            .ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "vaccine `{}` references missing type `{}`",
                    vaccine.code, vaccine.vaccine_type_code
                ))
            })?;

        Ok(Some(VaccineDetail {
            vaccine,
            vaccine_type,
        }))
    }
}

fn validate(vaccine: &Vaccine) -> RepoResult<()> {
    require_non_blank("vaccine code", &vaccine.code)?;
    require_non_blank("vaccine description", &vaccine.description)?;
    require_non_blank("vaccine type code", &vaccine.vaccine_type_code)
}
