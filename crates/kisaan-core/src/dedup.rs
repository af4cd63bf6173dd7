//! Id de-duplication for API collections.
//!
//! Ids are unique within one fetched collection by convention only; the
//! course and wiki endpoints have been seen to repeat rows. Lists are
//! de-duplicated before render: first occurrence wins, order is otherwise
//! preserved.

use std::collections::HashSet;

/// An entity with a server-assigned identifier.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Keep the first entity for each id, preserving order.
#[must_use]
pub fn dedup_by_id<T: Identified>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|item| seen.insert(item.id())).collect()
}
