//! Registry use-case managers.
//!
//! # Responsibility
//! - Orchestrate repository calls into caller-facing APIs.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod vaccine_service;
pub mod vaccine_type_service;

use crate::repo::error::{RepoError, RepoResult};

/// Rejects empty or whitespace-only required fields.
pub(crate) fn require_non_blank(field: &str, value: &str) -> RepoResult<()> {
    if value.trim().is_empty() {
        return Err(RepoError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
