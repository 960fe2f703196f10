//! Author repository contracts and registry-backed implementation.

use crate::model::author::{Author, AuthorId};
use crate::repo::{RegistryRepository, RepoError, RepoResult};

/// Repository interface for author records.
pub trait AuthorRepository {
    fn create_author(&self, author: &Author) -> RepoResult<AuthorId>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
}

impl AuthorRepository for RegistryRepository<'_> {
    fn create_author(&self, author: &Author) -> RepoResult<AuthorId> {
        let mut state = self.registry().write();
        if state.authors.contains_key(&author.id()) {
            return Err(RepoError::DuplicateId(author.id()));
        }
        state.authors.insert(author.id(), author.clone());
        Ok(author.id())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        Ok(self.registry().read().authors.get(&id).cloned())
    }
}
