use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use ahash::RandomState;
use blanket::blanket;

/// An equality capability: an equality test paired with a hash function.
///
/// Implementations must uphold `equals(a, b) => hash(a) == hash(b)`. The
/// reverse doesn't need to hold; items that hash the same but aren't equal
/// are kept apart by [`HashSet`](crate::HashSet).
#[blanket(derive(Ref, Rc, Box))]
pub trait Comparer<T: ?Sized> {
    /// Whether `a` and `b` are to be considered the same element.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// The hash of `item`, consistent with [`Comparer::equals`].
    fn hash(&self, item: &T) -> u64;
}

/// Compares with the element's own [`Eq`] and [`Hash`].
///
/// Hashing is seeded per comparer, so hashes are only stable for the
/// lifetime of a single comparer value.
#[derive(Debug, Clone, Default)]
pub struct DefaultComparer {
    state: RandomState,
}

impl DefaultComparer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Eq + Hash + ?Sized> Comparer<T> for DefaultComparer {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash(&self, item: &T) -> u64 {
        BuildHasher::hash_one(&self.state, item)
    }
}

/// A comparer made from a pair of closures.
#[derive(Clone)]
pub struct FnComparer<E, H> {
    equals: E,
    hash: H,
}

impl<E, H> FnComparer<E, H> {
    pub fn new(equals: E, hash: H) -> Self {
        Self { equals, hash }
    }
}

impl<E, H> fmt::Debug for FnComparer<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparer").finish_non_exhaustive()
    }
}

impl<T: ?Sized, E, H> Comparer<T> for FnComparer<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }

    #[inline]
    fn hash(&self, item: &T) -> u64 {
        (self.hash)(item)
    }
}

/// Compares elements by a projected key.
///
/// Two elements are equal when their keys are equal; the hash is the hash
/// of the key.
pub struct KeyComparer<F, K> {
    key: F,
    state: RandomState,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> KeyComparer<F, K> {
    pub fn new<T: ?Sized>(key: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        Self {
            key,
            state: RandomState::new(),
            _key: PhantomData,
        }
    }
}

impl<F: Clone, K> Clone for KeyComparer<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            state: self.state.clone(),
            _key: PhantomData,
        }
    }
}

impl<F, K> fmt::Debug for KeyComparer<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyComparer").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F, K> Comparer<T> for KeyComparer<F, K>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    #[inline]
    fn hash(&self, item: &T) -> u64 {
        BuildHasher::hash_one(&self.state, (self.key)(item))
    }
}
