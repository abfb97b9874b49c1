//! Vaccine domain model.
//!
//! # Invariants
//! - `code` is the primary key of the `vaccines` table.
//! - `vaccine_type_code` must name an existing `VaccineType` when persisted.

use crate::model::vaccine_type::VaccineType;
use serde::{Deserialize, Serialize};

/// One administrable vaccine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccine {
    /// Primary key. Storage accepts 1 to 10 characters.
    pub code: String,
    /// Storage accepts up to 50 characters.
    pub description: String,
    /// Foreign key to `VaccineType::code`.
    pub vaccine_type_code: String,
}

impl Vaccine {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        vaccine_type_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            vaccine_type_code: vaccine_type_code.into(),
        }
    }

    /// Builds a vaccine that references `vaccine_type`.
    pub fn of_type(
        code: impl Into<String>,
        description: impl Into<String>,
        vaccine_type: &VaccineType,
    ) -> Self {
        Self::new(code, description, vaccine_type.code.clone())
    }
}

/// A vaccine together with its resolved type record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineDetail {
    pub vaccine: Vaccine,
    pub vaccine_type: VaccineType,
}
