//! Article use-case service.
//!
//! # Responsibility
//! - Create articles and register them in one step.
//! - Render the diagnostic article description from current record names.
//!
//! # Invariants
//! - A rejected article never reaches the registry.
//! - Log events carry identifiers and lengths only, never titles or names.

use crate::model::article::{Article, ArticleId};
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::repo::{ArticleListQuery, CatalogRepository, RepoError, RepoResult};
use log::{info, warn};
use std::fmt::{Display, Formatter};

/// Diagnostic view of one article with its author and magazine names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDescription {
    pub title: String,
    pub author_name: String,
    pub magazine_name: String,
}

impl Display for ArticleDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Article(title='{}', author='{}', magazine='{}')",
            self.title, self.author_name, self.magazine_name
        )
    }
}

/// Use-case service for article creation and lookup.
pub struct ArticleService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> ArticleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds an article and appends it to the registry.
    ///
    /// # Errors
    /// - `RepoError::Validation` when the title is not 5 to 50 characters.
    /// - `RepoError::AuthorNotFound` / `MagazineNotFound` for unregistered
    ///   references.
    pub fn create_article(
        &self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        register_article(&self.repo, author_id, magazine_id, title)
    }

    pub fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        self.repo.get_article(id)
    }

    /// Lists every registered article in registry order.
    pub fn list_articles(&self) -> RepoResult<Vec<Article>> {
        self.repo.list_articles(&ArticleListQuery::default())
    }

    pub fn article_count(&self) -> RepoResult<usize> {
        self.repo.count_articles()
    }

    /// Resolves the article's current author and magazine names.
    pub fn describe_article(&self, id: ArticleId) -> RepoResult<ArticleDescription> {
        let article = self
            .repo
            .get_article(id)?
            .ok_or(RepoError::ArticleNotFound(id))?;
        let author = self
            .repo
            .get_author(article.author_id())?
            .ok_or(RepoError::AuthorNotFound(article.author_id()))?;
        let magazine = self
            .repo
            .get_magazine(article.magazine_id())?
            .ok_or(RepoError::MagazineNotFound(article.magazine_id()))?;

        Ok(ArticleDescription {
            title: article.title().to_string(),
            author_name: author.name().to_string(),
            magazine_name: magazine.name().to_string(),
        })
    }
}

/// Shared creation path for `ArticleService` and `AuthorService::add_article`.
pub(crate) fn register_article<R: CatalogRepository>(
    repo: &R,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: impl Into<String>,
) -> RepoResult<Article> {
    let title = title.into();
    let title_len = title.chars().count();

    let article = match Article::new(author_id, magazine_id, title) {
        Ok(article) => article,
        Err(err) => {
            warn!(
                "event=article_create module=service status=rejected author_id={} magazine_id={} title_len={} error={}",
                author_id, magazine_id, title_len, err
            );
            return Err(err.into());
        }
    };

    match repo.append_article(&article) {
        Ok(article_id) => {
            info!(
                "event=article_create module=service status=ok article_id={} author_id={} magazine_id={}",
                article_id, author_id, magazine_id
            );
            Ok(article)
        }
        Err(err) => {
            warn!(
                "event=article_create module=service status=error author_id={} magazine_id={} error={}",
                author_id, magazine_id, err
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ArticleDescription;

    #[test]
    fn description_uses_quoted_field_format() {
        let description = ArticleDescription {
            title: "A Great Title".to_string(),
            author_name: "Ann".to_string(),
            magazine_name: "Tech Weekly".to_string(),
        };
        assert_eq!(
            description.to_string(),
            "Article(title='A Great Title', author='Ann', magazine='Tech Weekly')"
        );
    }
}
