//! Author record.
//!
//! # Invariants
//! - `id` is stable and never reused for another author.
//! - `name` is fixed at construction and is not validated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for authors.
pub type AuthorId = Uuid;

/// Person who writes articles.
///
/// Two authors with the same name are still different authors; queries
/// compare `id` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Creates an author with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided ID.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
