//! Repository layer abstractions and the registry-backed implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per record kind.
//! - Keep registry borrowing details away from service orchestration.
//!
//! # Invariants
//! - Article writes must pass `Article::validate()` and reference registered
//!   authors/magazines before anything is appended.
//! - Repository APIs return semantic errors (`*NotFound`, `DuplicateId`) in
//!   addition to validation errors.

pub mod article_repo;
pub mod author_repo;
pub mod magazine_repo;

use crate::model::article::ArticleId;
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::ValidationError;
use crate::registry::Registry;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub use article_repo::{ArticleListQuery, ArticleRepository};
pub use author_repo::AuthorRepository;
pub use magazine_repo::MagazineRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for catalog repository and service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    ArticleNotFound(ArticleId),
    /// A record with this identifier is already registered.
    DuplicateId(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::DuplicateId(id) => write!(f, "record already registered: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::AuthorNotFound(_) => None,
            Self::MagazineNotFound(_) => None,
            Self::ArticleNotFound(_) => None,
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Everything a catalog service needs from storage.
pub trait CatalogRepository: ArticleRepository + AuthorRepository + MagazineRepository {}

impl<T> CatalogRepository for T where T: ArticleRepository + AuthorRepository + MagazineRepository {}

/// Repository over a shared [`Registry`].
///
/// Cheap to copy; every copy sees the same registry state.
#[derive(Debug, Clone, Copy)]
pub struct RegistryRepository<'reg> {
    registry: &'reg Registry,
}

impl<'reg> RegistryRepository<'reg> {
    pub fn new(registry: &'reg Registry) -> Self {
        Self { registry }
    }

    pub(crate) fn registry(&self) -> &'reg Registry {
        self.registry
    }
}
