//! Domain Layer - Core Entity Trait
//!
//! Every record kept in an ordered list (items, toasts) is looked up by
//! its identifier through this trait.

/// Core trait for entities held in an ordered list
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: PartialEq;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Position of the entity with the given ID, if present
pub fn find_index<T: Entity>(list: &[T], id: &T::Id) -> Option<usize> {
    list.iter().position(|entity| entity.id() == id)
}
