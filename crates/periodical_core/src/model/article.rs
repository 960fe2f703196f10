//! Article record linking one author to one magazine.
//!
//! # Responsibility
//! - Define the join record stored in the registry.
//! - Reject titles outside the accepted length range at every entry point,
//!   including deserialization.
//!
//! # Invariants
//! - `author_id` and `magazine_id` are fixed at construction.
//! - `title` is immutable and always satisfies `validate_title`.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{validate_title, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for articles.
pub type ArticleId = Uuid;

/// One article written by an author for a magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    id: ArticleId,
    title: String,
    author_id: AuthorId,
    magazine_id: MagazineId,
}

/// Unchecked wire shape used to route deserialization through validation.
#[derive(Deserialize)]
struct ArticleRecord {
    id: ArticleId,
    title: String,
    author_id: AuthorId,
    magazine_id: MagazineId,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ValidationError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.author_id, record.magazine_id, record.title)
    }
}

impl Article {
    /// Creates an article with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is not 5 to 50
    ///   characters long.
    pub fn new(
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author_id, magazine_id, title)
    }

    /// Creates an article with a caller-provided stable ID.
    pub fn with_id(
        id: ArticleId,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id,
            title,
            author_id,
            magazine_id,
        })
    }

    /// Re-checks the title invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }
}
