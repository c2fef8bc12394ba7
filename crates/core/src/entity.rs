//! Entity trait: identity + continuity across state changes.

use stockroom_sequence::DynamicSequence;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Position of the entity with identifier `id`, found by linear scan.
pub fn position_by_id<E: Entity>(entities: &DynamicSequence<E>, id: &E::Id) -> Option<usize> {
    entities.iter().position(|entity| entity.id() == id)
}
