//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products and cart lines are entities: two lines carrying the same product id
/// are the same line, whatever their quantities.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
