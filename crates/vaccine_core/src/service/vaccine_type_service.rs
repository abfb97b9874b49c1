//! Vaccine type use-case manager.

use crate::model::vaccine_type::VaccineType;
use crate::repo::error::RepoResult;
use crate::repo::vaccine_type_repo::VaccineTypeIoOperations;
use crate::service::require_non_blank;

/// Caller-facing wrapper for vaccine type CRUD operations.
pub struct VaccineTypeBrowserManager<T: VaccineTypeIoOperations> {
    repo: T,
}

impl<T: VaccineTypeIoOperations> VaccineTypeBrowserManager<T> {
    pub fn new(repo: T) -> Self {
        Self { repo }
    }

    /// Lists every vaccine type ordered by description.
    pub fn get_vaccine_types(&self) -> RepoResult<Vec<VaccineType>> {
        self.repo.get_vaccine_types()
    }

    /// Creates a vaccine type after checking required fields are present.
    pub fn new_vaccine_type(&self, vaccine_type: &VaccineType) -> RepoResult<VaccineType> {
        validate(vaccine_type)?;
        self.repo.new_vaccine_type(vaccine_type)
    }

    pub fn update_vaccine_type(&self, vaccine_type: &VaccineType) -> RepoResult<VaccineType> {
        validate(vaccine_type)?;
        self.repo.update_vaccine_type(vaccine_type)
    }

    pub fn delete_vaccine_type(&self, vaccine_type: &VaccineType) -> RepoResult<bool> {
        self.repo.delete_vaccine_type(vaccine_type)
    }

    pub fn is_code_present(&self, code: &str) -> RepoResult<bool> {
        self.repo.is_code_present(code)
    }

    pub fn find_vaccine_type(&self, code: &str) -> RepoResult<Option<VaccineType>> {
        self.repo.find_vaccine_type(code)
    }
}

fn validate(vaccine_type: &VaccineType) -> RepoResult<()> {
    require_non_blank("vaccine type code", &vaccine_type.code)?;
    require_non_blank("vaccine type description", &vaccine_type.description)
}
