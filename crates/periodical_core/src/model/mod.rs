//! Catalog domain model: authors, magazines and the articles joining them.
//!
//! # Responsibility
//! - Define the records stored in the registry.
//! - Own field-level validation for titles, magazine names and categories.
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid`; equality in queries is by
//!   identifier, never by field values.
//! - Records reference each other by identifier only.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
