//! Magazine record.
//!
//! # Responsibility
//! - Hold the mutable name/category pair for one magazine.
//! - Guard every post-construction assignment with field validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another magazine.
//! - A rejected assignment leaves the previous value in place.
//! - Construction stores the given values as-is; only setters validate.

use crate::model::validation::{validate_category, validate_magazine_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for magazines.
pub type MagazineId = Uuid;

/// Publication that articles appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates a magazine with a generated stable ID.
    ///
    /// Values are stored without running the setter checks, so a magazine
    /// may start with a name that `set_name` would refuse.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided ID.
    pub fn with_id(id: MagazineId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
        }
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name when it is 2 to 16 characters long.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category when it is non-empty.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }
}
