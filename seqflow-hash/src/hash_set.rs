// A hash set whose notion of equality comes from a Comparer rather than
// from the element type. Entries are grouped into buckets by the comparer's
// hash. A bucket holds one representative plus an overflow list for items
// that share the hash but aren't equal to it, so a hash collision never
// turns into a false "already present".

use std::collections::hash_map::{self, Entry};
use std::fmt;

use ahash::{HashMap, HashMapExt};

use crate::Comparer;

#[derive(Debug, Clone)]
struct Bucket<T> {
    representative: T,
    overflow: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Representative,
    Overflow(usize),
}

type BucketIter<'a, T> = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

impl<T> Bucket<T> {
    fn new(representative: T) -> Self {
        Self {
            representative,
            overflow: Vec::new(),
        }
    }

    fn find<C: Comparer<T>>(&self, comparer: &C, item: &T) -> Option<Slot> {
        if comparer.equals(&self.representative, item) {
            return Some(Slot::Representative);
        }
        self.overflow
            .iter()
            .position(|other| comparer.equals(other, item))
            .map(Slot::Overflow)
    }

    fn iter(&self) -> BucketIter<'_, T> {
        std::iter::once(&self.representative).chain(self.overflow.iter())
    }
}

/// A set of items deduplicated by a [`Comparer`].
///
/// The set is meant to be short-lived: built at the start of an operation,
/// filled while buffering, and dropped when the operation completes.
#[derive(Clone)]
pub struct HashSet<T, C> {
    comparer: C,
    buckets: HashMap<u64, Bucket<T>>,
    len: usize,
}

impl<T, C> HashSet<T, C>
where
    C: Comparer<T>,
{
    /// Create an empty set using `comparer` for equality and hashing.
    pub fn new(comparer: C) -> Self {
        Self {
            comparer,
            buckets: HashMap::new(),
            len: 0,
        }
    }

    /// Create an empty set with room for `capacity` distinct hashes.
    pub fn with_capacity(capacity: usize, comparer: C) -> Self {
        Self {
            comparer,
            buckets: HashMap::with_capacity(capacity),
            len: 0,
        }
    }

    /// The comparer this set was created with.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// The number of distinct items in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add `item` unless an equal item is already present.
    ///
    /// Returns `true` if the item was newly inserted.
    pub fn add(&mut self, item: T) -> bool {
        let hash = self.comparer.hash(&item);
        match self.buckets.entry(hash) {
            Entry::Occupied(mut entry) => {
                let bucket = entry.get_mut();
                if bucket.find(&self.comparer, &item).is_some() {
                    return false;
                }
                bucket.overflow.push(item);
            }
            Entry::Vacant(entry) => {
                entry.insert(Bucket::new(item));
            }
        }
        self.len += 1;
        true
    }

    /// Whether an item equal to `item` was added before.
    pub fn contains(&self, item: &T) -> bool {
        let hash = self.comparer.hash(item);
        self.buckets
            .get(&hash)
            .is_some_and(|bucket| bucket.find(&self.comparer, item).is_some())
    }

    /// Remove the item equal to `item`, if any.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        let hash = self.comparer.hash(item);
        let Entry::Occupied(mut entry) = self.buckets.entry(hash) else {
            return false;
        };
        let bucket = entry.get_mut();
        match bucket.find(&self.comparer, item) {
            None => return false,
            Some(Slot::Overflow(index)) => {
                bucket.overflow.swap_remove(index);
            }
            Some(Slot::Representative) => match bucket.overflow.pop() {
                // promote an overflow item so the bucket stays non-empty
                Some(promoted) => bucket.representative = promoted,
                None => {
                    entry.remove();
                }
            },
        }
        self.len -= 1;
        true
    }

    /// Remove all items, keeping the comparer.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }

    /// Iterate over the items in an unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buckets: self.buckets.values(),
            current: None,
        }
    }
}

impl<T, C> Extend<T> for HashSet<T, C>
where
    C: Comparer<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, C> fmt::Debug for HashSet<T, C>
where
    T: fmt::Debug,
    C: Comparer<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a HashSet<T, C>
where
    C: Comparer<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the items of a [`HashSet`].
pub struct Iter<'a, T> {
    buckets: hash_map::Values<'a, u64, Bucket<T>>,
    current: Option<BucketIter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            // drain the bucket we're in before moving on
            if let Some(current) = &mut self.current {
                if let Some(item) = current.next() {
                    return Some(item);
                }
            }
            let bucket = self.buckets.next()?;
            self.current = Some(bucket.iter());
        }
    }
}
