//! Magazine repository contracts and registry-backed implementation.
//!
//! # Invariants
//! - `update_magazine` stores the record as given; field checks belong to
//!   the `Magazine` setters that produced it.

use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::{RegistryRepository, RepoError, RepoResult};

/// Repository interface for magazine records.
pub trait MagazineRepository {
    fn create_magazine(&self, magazine: &Magazine) -> RepoResult<MagazineId>;
    fn update_magazine(&self, magazine: &Magazine) -> RepoResult<()>;
    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>>;
}

impl MagazineRepository for RegistryRepository<'_> {
    fn create_magazine(&self, magazine: &Magazine) -> RepoResult<MagazineId> {
        let mut state = self.registry().write();
        if state.magazines.contains_key(&magazine.id()) {
            return Err(RepoError::DuplicateId(magazine.id()));
        }
        state.magazines.insert(magazine.id(), magazine.clone());
        Ok(magazine.id())
    }

    fn update_magazine(&self, magazine: &Magazine) -> RepoResult<()> {
        let mut state = self.registry().write();
        match state.magazines.get_mut(&magazine.id()) {
            Some(stored) => {
                *stored = magazine.clone();
                Ok(())
            }
            None => Err(RepoError::MagazineNotFound(magazine.id())),
        }
    }

    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        Ok(self.registry().read().magazines.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::MagazineRepository;
    use crate::model::magazine::Magazine;
    use crate::registry::open_registry;
    use crate::repo::{RegistryRepository, RepoError};

    #[test]
    fn update_replaces_stored_record() {
        let registry = open_registry();
        let repo = RegistryRepository::new(&registry);
        let mut magazine = Magazine::new("Tech Weekly", "Technology");
        repo.create_magazine(&magazine).unwrap();

        magazine.set_category("Science").unwrap();
        repo.update_magazine(&magazine).unwrap();

        let loaded = repo.get_magazine(magazine.id()).unwrap().unwrap();
        assert_eq!(loaded.category(), "Science");
    }

    #[test]
    fn update_unknown_magazine_returns_not_found() {
        let registry = open_registry();
        let repo = RegistryRepository::new(&registry);
        let magazine = Magazine::new("Tech Weekly", "Technology");

        let err = repo.update_magazine(&magazine).unwrap_err();
        assert_eq!(err, RepoError::MagazineNotFound(magazine.id()));
    }
}
