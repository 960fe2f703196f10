//! Magazine use-case service.
//!
//! # Responsibility
//! - Register magazines and apply validated name/category changes.
//! - Answer "who wrote what in this magazine" from the registry.
//!
//! # Invariants
//! - A rejected rename or category change leaves the stored record intact.
//! - `contributing_authors` is sorted by name, ties broken by identifier.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::{ArticleListQuery, CatalogRepository, RepoError, RepoResult};
use crate::service::distinct_ids;
use log::{info, warn};

/// Use-case service for magazine registration, edits and queries.
pub struct MagazineService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> MagazineService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and registers a magazine.
    ///
    /// Initial values skip the setter checks, matching `Magazine::new`.
    pub fn create_magazine(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let magazine = Magazine::new(name, category);
        self.repo.create_magazine(&magazine)?;
        info!(
            "event=magazine_create module=service status=ok magazine_id={}",
            magazine.id()
        );
        Ok(magazine)
    }

    pub fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        self.repo.get_magazine(id)
    }

    /// Assigns a new name (2 to 16 characters) and returns the updated record.
    pub fn rename(&self, id: MagazineId, name: impl Into<String>) -> RepoResult<Magazine> {
        let mut magazine = self.load_magazine(id)?;
        if let Err(err) = magazine.set_name(name) {
            warn!(
                "event=magazine_rename module=service status=rejected magazine_id={} error={}",
                id, err
            );
            return Err(err.into());
        }
        self.repo.update_magazine(&magazine)?;
        info!(
            "event=magazine_rename module=service status=ok magazine_id={}",
            id
        );
        Ok(magazine)
    }

    /// Assigns a new non-empty category and returns the updated record.
    pub fn set_category(
        &self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let mut magazine = self.load_magazine(id)?;
        if let Err(err) = magazine.set_category(category) {
            warn!(
                "event=magazine_set_category module=service status=rejected magazine_id={} error={}",
                id, err
            );
            return Err(err.into());
        }
        self.repo.update_magazine(&magazine)?;
        info!(
            "event=magazine_set_category module=service status=ok magazine_id={}",
            id
        );
        Ok(magazine)
    }

    /// Every article published in this magazine, in creation order.
    pub fn articles(&self, id: MagazineId) -> RepoResult<Vec<Article>> {
        self.load_magazine(id)?;
        self.repo.list_articles(&ArticleListQuery::by_magazine(id))
    }

    /// Distinct authors with at least one article in this magazine.
    pub fn contributors(&self, id: MagazineId) -> RepoResult<Vec<Author>> {
        let articles = self.articles(id)?;
        distinct_ids(articles.iter().map(Article::author_id))
            .into_iter()
            .map(|author_id| self.load_author(author_id))
            .collect()
    }

    /// Titles in creation order, or `None` when nothing was published.
    pub fn article_titles(&self, id: MagazineId) -> RepoResult<Option<Vec<String>>> {
        let articles = self.articles(id)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            articles
                .iter()
                .map(|article| article.title().to_string())
                .collect(),
        ))
    }

    /// Contributors sorted by name, or `None` when there are none.
    pub fn contributing_authors(&self, id: MagazineId) -> RepoResult<Option<Vec<Author>>> {
        let mut authors = self.contributors(id)?;
        if authors.is_empty() {
            return Ok(None);
        }
        authors.sort_by(|left, right| {
            left.name()
                .cmp(right.name())
                .then_with(|| left.id().cmp(&right.id()))
        });
        Ok(Some(authors))
    }

    fn load_magazine(&self, id: MagazineId) -> RepoResult<Magazine> {
        self.repo
            .get_magazine(id)?
            .ok_or(RepoError::MagazineNotFound(id))
    }

    fn load_author(&self, id: AuthorId) -> RepoResult<Author> {
        self.repo
            .get_author(id)?
            .ok_or(RepoError::AuthorNotFound(id))
    }
}
