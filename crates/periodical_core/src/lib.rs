//! Core domain logic for the periodical catalog.
//! Authors write articles, articles appear in magazines, and every
//! relationship query is answered from one shared registry.

pub mod logging;
pub mod model;
pub mod registry;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::ValidationError;
pub use registry::{open_registry, Registry};
pub use repo::{
    ArticleListQuery, ArticleRepository, AuthorRepository, CatalogRepository, MagazineRepository,
    RegistryRepository, RepoError, RepoResult,
};
pub use service::article_service::{ArticleDescription, ArticleService};
pub use service::author_service::AuthorService;
pub use service::magazine_service::MagazineService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
