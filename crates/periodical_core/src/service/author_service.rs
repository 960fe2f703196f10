//! Author use-case service.
//!
//! # Responsibility
//! - Register authors.
//! - Answer "what did this author write, and where" from the registry.
//!
//! # Invariants
//! - `articles` preserves registry insertion order.
//! - `magazines` and `topic_areas` are deduplicated; callers must not rely
//!   on their order.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::{ArticleListQuery, CatalogRepository, RepoError, RepoResult};
use crate::service::article_service::register_article;
use crate::service::distinct_ids;
use log::info;
use std::collections::BTreeSet;

/// Use-case service for author registration and author-centric queries.
pub struct AuthorService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and registers an author. Names are stored unvalidated.
    pub fn create_author(&self, name: impl Into<String>) -> RepoResult<Author> {
        let author = Author::new(name);
        self.repo.create_author(&author)?;
        info!(
            "event=author_create module=service status=ok author_id={}",
            author.id()
        );
        Ok(author)
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    /// Every article by this author, in creation order.
    pub fn articles(&self, id: AuthorId) -> RepoResult<Vec<Article>> {
        self.ensure_author(id)?;
        self.repo.list_articles(&ArticleListQuery::by_author(id))
    }

    /// Distinct magazines this author has written for.
    pub fn magazines(&self, id: AuthorId) -> RepoResult<Vec<Magazine>> {
        let articles = self.articles(id)?;
        distinct_ids(articles.iter().map(Article::magazine_id))
            .into_iter()
            .map(|magazine_id| self.load_magazine(magazine_id))
            .collect()
    }

    /// Creates an article by this author in `magazine_id`.
    ///
    /// Validation failures propagate unchanged and leave the registry as is.
    pub fn add_article(
        &self,
        id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        register_article(&self.repo, id, magazine_id, title)
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(&self, id: AuthorId) -> RepoResult<Option<Vec<String>>> {
        let magazines = self.magazines(id)?;
        if magazines.is_empty() {
            return Ok(None);
        }

        let categories: BTreeSet<String> = magazines
            .into_iter()
            .map(|magazine| magazine.category().to_string())
            .collect();
        Ok(Some(categories.into_iter().collect()))
    }

    fn ensure_author(&self, id: AuthorId) -> RepoResult<()> {
        match self.repo.get_author(id)? {
            Some(_) => Ok(()),
            None => Err(RepoError::AuthorNotFound(id)),
        }
    }

    fn load_magazine(&self, id: MagazineId) -> RepoResult<Magazine> {
        self.repo
            .get_magazine(id)?
            .ok_or(RepoError::MagazineNotFound(id))
    }
}
