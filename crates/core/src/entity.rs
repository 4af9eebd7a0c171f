//! What makes a stored value addressable and what makes two values the same.

/// Something other entities can point at by id.
///
/// The id survives edits, so a weak reference taken before an edit still
/// resolves afterwards through `UniqueList::get_by_id`.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Domain identity: the subset of fields that decides whether two values
/// describe the same real-world thing.
///
/// Weaker than `PartialEq`: unique collections use `is_same` for duplicate
/// detection and lookup, while full equality still tells an edited entity
/// apart from its original.
pub trait Identity {
    /// Lowercase entity name used in error messages and logs.
    const KIND: &'static str;

    fn is_same(&self, other: &Self) -> bool;
}
