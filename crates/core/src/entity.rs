//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Items and locations are both aggregate roots: they own their lifecycle and are
/// the unit a repository loads and persists.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
