// ABOUTME: Phantom-typed identifiers for runtime types and objects.
// ABOUTME: Prevents mixing a type id with an object id at compile time.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

/// Marker types for phantom type parameters.
pub enum TypeMarker {}
pub enum ObjectMarker {}

/// Shared by every id kind, so ids are unique across the whole process.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique identifier tagged with the kind of entity it names.
#[must_use = "IDs identify runtime entities and should not be ignored"]
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub(crate) fn fresh() -> Self {
        Self {
            value: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            _marker: PhantomData,
        }
    }

    pub fn get(&self) -> u64 {
        self.value
    }
}

// Manual trait implementations that don't require T to implement the trait.

impl<T> std::fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Id").field(&self.value).finish()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::fmt::Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.value)
    }
}

pub type TypeId = Id<TypeMarker>;
pub type ObjectId = Id<ObjectMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        let a = TypeId::fresh();
        let b = TypeId::fresh();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }
}
