//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use std::collections::HashSet;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Ids that appear more than once, in order of their second appearance
pub fn duplicate_ids<T: Entity>(entities: &[T]) -> Vec<T::Id> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    entities
        .iter()
        .map(Entity::id)
        .filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}
