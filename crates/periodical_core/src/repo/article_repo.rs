//! Article registry contracts and registry-backed implementation.
//!
//! # Invariants
//! - `append_article` either appends exactly one entry or leaves the
//!   registry untouched.
//! - Listing always returns registry insertion order.

use crate::model::article::{Article, ArticleId};
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::repo::{RegistryRepository, RepoError, RepoResult};

/// Filter options for listing articles.
///
/// Unset fields match every article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub author_id: Option<AuthorId>,
    pub magazine_id: Option<MagazineId>,
}

impl ArticleListQuery {
    pub fn by_author(author_id: AuthorId) -> Self {
        Self {
            author_id: Some(author_id),
            magazine_id: None,
        }
    }

    pub fn by_magazine(magazine_id: MagazineId) -> Self {
        Self {
            author_id: None,
            magazine_id: Some(magazine_id),
        }
    }

    fn matches(&self, article: &Article) -> bool {
        self.author_id.is_none_or(|id| article.author_id() == id)
            && self.magazine_id.is_none_or(|id| article.magazine_id() == id)
    }
}

/// Repository interface for the append-only article registry.
pub trait ArticleRepository {
    fn append_article(&self, article: &Article) -> RepoResult<ArticleId>;
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<Article>>;
    fn count_articles(&self) -> RepoResult<usize>;
}

impl ArticleRepository for RegistryRepository<'_> {
    fn append_article(&self, article: &Article) -> RepoResult<ArticleId> {
        article.validate()?;

        let mut state = self.registry().write();
        if !state.authors.contains_key(&article.author_id()) {
            return Err(RepoError::AuthorNotFound(article.author_id()));
        }
        if !state.magazines.contains_key(&article.magazine_id()) {
            return Err(RepoError::MagazineNotFound(article.magazine_id()));
        }
        if state.articles.iter().any(|existing| existing.id() == article.id()) {
            return Err(RepoError::DuplicateId(article.id()));
        }

        state.articles.push(article.clone());
        Ok(article.id())
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let state = self.registry().read();
        Ok(state
            .articles
            .iter()
            .find(|article| article.id() == id)
            .cloned())
    }

    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<Article>> {
        let state = self.registry().read();
        Ok(state
            .articles
            .iter()
            .filter(|article| query.matches(article))
            .cloned()
            .collect())
    }

    fn count_articles(&self) -> RepoResult<usize> {
        Ok(self.registry().read().articles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleListQuery, ArticleRepository};
    use crate::model::article::Article;
    use crate::model::author::Author;
    use crate::model::magazine::Magazine;
    use crate::registry::open_registry;
    use crate::repo::{AuthorRepository, MagazineRepository, RegistryRepository, RepoError};

    #[test]
    fn append_rejects_unregistered_references() {
        let registry = open_registry();
        let repo = RegistryRepository::new(&registry);
        let author = Author::new("Ann");
        let magazine = Magazine::new("Tech Weekly", "Technology");
        let article = Article::new(author.id(), magazine.id(), "A Great Title").unwrap();

        let err = repo.append_article(&article).unwrap_err();
        assert_eq!(err, RepoError::AuthorNotFound(author.id()));

        repo.create_author(&author).unwrap();
        let err = repo.append_article(&article).unwrap_err();
        assert_eq!(err, RepoError::MagazineNotFound(magazine.id()));

        assert_eq!(repo.count_articles().unwrap(), 0);
    }

    #[test]
    fn append_rejects_duplicate_article_id() {
        let registry = open_registry();
        let repo = RegistryRepository::new(&registry);
        let author = Author::new("Ann");
        let magazine = Magazine::new("Tech Weekly", "Technology");
        repo.create_author(&author).unwrap();
        repo.create_magazine(&magazine).unwrap();

        let article = Article::new(author.id(), magazine.id(), "A Great Title").unwrap();
        repo.append_article(&article).unwrap();
        let err = repo.append_article(&article).unwrap_err();

        assert_eq!(err, RepoError::DuplicateId(article.id()));
        assert_eq!(repo.count_articles().unwrap(), 1);
    }

    #[test]
    fn list_filters_by_author_and_magazine() {
        let registry = open_registry();
        let repo = RegistryRepository::new(&registry);
        let ann = Author::new("Ann");
        let bob = Author::new("Bob");
        let tech = Magazine::new("Tech Weekly", "Technology");
        let food = Magazine::new("Food Daily", "Cooking");
        for author in [&ann, &bob] {
            repo.create_author(author).unwrap();
        }
        for magazine in [&tech, &food] {
            repo.create_magazine(magazine).unwrap();
        }

        let first = Article::new(ann.id(), tech.id(), "Rust in Production").unwrap();
        let second = Article::new(bob.id(), tech.id(), "Borrowing Explained").unwrap();
        let third = Article::new(ann.id(), food.id(), "Sourdough Basics").unwrap();
        for article in [&first, &second, &third] {
            repo.append_article(article).unwrap();
        }

        let by_ann = repo
            .list_articles(&ArticleListQuery::by_author(ann.id()))
            .unwrap();
        assert_eq!(by_ann, vec![first.clone(), third.clone()]);

        let in_tech = repo
            .list_articles(&ArticleListQuery::by_magazine(tech.id()))
            .unwrap();
        assert_eq!(in_tech, vec![first.clone(), second.clone()]);

        let all = repo.list_articles(&ArticleListQuery::default()).unwrap();
        assert_eq!(all, vec![first, second, third]);
    }

    #[test]
    fn query_with_both_filters_requires_both_to_match() {
        let ann = Author::new("Ann");
        let tech = Magazine::new("Tech Weekly", "Technology");
        let food = Magazine::new("Food Daily", "Cooking");
        let query = ArticleListQuery {
            author_id: Some(ann.id()),
            magazine_id: Some(tech.id()),
        };

        let in_tech = Article::new(ann.id(), tech.id(), "Rust in Production").unwrap();
        let in_food = Article::new(ann.id(), food.id(), "Sourdough Basics").unwrap();
        let by_other = Article::new(Author::new("Bob").id(), tech.id(), "Borrowing Explained")
            .unwrap();

        assert!(query.matches(&in_tech));
        assert!(!query.matches(&in_food));
        assert!(!query.matches(&by_other));
        assert!(ArticleListQuery::default().matches(&by_other));
    }
}
