//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the author/magazine/article APIs.
//! - Derive relationship views by filtering the article registry at call
//!   time.
//!
//! # Invariants
//! - Relationship queries are never cached; each call re-reads the registry.
//! - Services remain storage-agnostic and only see repository traits.

pub mod article_service;
pub mod author_service;
pub mod magazine_service;

use std::collections::HashSet;
use uuid::Uuid;

/// Deduplicates identifiers, keeping the first appearance of each.
pub(crate) fn distinct_ids(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::distinct_ids;
    use uuid::Uuid;

    #[test]
    fn distinct_ids_keeps_first_appearance_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(distinct_ids([b, a, b, a, a]), vec![b, a]);
    }
}
