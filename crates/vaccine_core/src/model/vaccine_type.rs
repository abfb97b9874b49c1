//! Vaccine type domain model.

use serde::{Deserialize, Serialize};

/// Category a vaccine belongs to (for example "A" for childhood vaccines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineType {
    /// Primary key. Storage accepts exactly one character.
    pub code: String,
    /// Human-readable label. Storage accepts up to 50 characters.
    pub description: String,
}

impl VaccineType {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}
