//! Shared in-memory registry backing every catalog query.
//!
//! # Responsibility
//! - Own the append-only article sequence and the author/magazine records
//!   that article identifiers resolve to.
//! - Hand out scoped borrows to repository implementations.
//!
//! # Invariants
//! - Articles are only ever appended; existing entries are never removed or
//!   reordered.
//! - The registry is `!Sync`, so all access stays on one thread.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use log::debug;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;

/// In-memory store shared by all repositories created from it.
///
/// Repositories borrow the registry immutably and mutate through interior
/// mutability, so several repositories can coexist over one registry.
#[derive(Debug, Default)]
pub struct Registry {
    state: RefCell<RegistryState>,
}

#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    pub(crate) authors: BTreeMap<AuthorId, Author>,
    pub(crate) magazines: BTreeMap<MagazineId, Magazine>,
    pub(crate) articles: Vec<Article>,
}

/// Creates an empty registry.
pub fn open_registry() -> Registry {
    debug!("event=registry_open module=registry status=ok");
    Registry::default()
}

impl Registry {
    /// Number of articles ever registered.
    pub fn article_count(&self) -> usize {
        self.state.borrow().articles.len()
    }

    /// Borrows are never held across calls into other repository methods.
    pub(crate) fn read(&self) -> Ref<'_, RegistryState> {
        self.state.borrow()
    }

    pub(crate) fn write(&self) -> RefMut<'_, RegistryState> {
        self.state.borrow_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::open_registry;

    #[test]
    fn new_registry_is_empty() {
        let registry = open_registry();
        assert_eq!(registry.article_count(), 0);
        assert!(registry.read().authors.is_empty());
        assert!(registry.read().magazines.is_empty());
    }
}
