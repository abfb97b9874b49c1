//! Registry domain model.
//!
//! # Responsibility
//! - Define the value types exchanged between managers, repositories and
//!   callers.
//!
//! # Invariants
//! - Every record is identified by its `code`.
//! - Vaccines refer to their type by code only; the type record is looked up
//!   explicitly at read time.
//! - Field lengths are not checked here. Storage owns those limits.

pub mod vaccine;
pub mod vaccine_type;
