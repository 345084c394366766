// Terminals that reduce the whole source to one value. All of these
// produce every element; none of them can stop early.

use std::hash::Hash;
use std::ops::AddAssign;

use ahash::{HashMap, HashMapExt};
use num_traits::Zero;

use crate::Enumeration;

impl<'a, T: 'a> Enumeration<'a, T> {
    /// Collect every element into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        let mut items = Vec::new();
        self.for_each(|item| items.push(item));
        items
    }

    /// Collect every element into a map. A later element replaces an
    /// earlier one with the same key.
    pub fn to_map<K, V, FK, FV>(&self, key: FK, value: FV) -> HashMap<K, V>
    where
        K: Eq + Hash,
        FK: Fn(&T) -> K,
        FV: Fn(T) -> V,
    {
        let mut map = HashMap::new();
        self.for_each(|item| {
            map.insert(key(&item), value(item));
        });
        map
    }

    pub fn count(&self) -> usize {
        let mut count = 0;
        self.for_each(|_| count += 1);
        count
    }

    pub fn count_with<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        let mut count = 0;
        self.for_each(|item| {
            if predicate(&item) {
                count += 1;
            }
        });
        count
    }

    /// Sum `selector` over every element; zero for an empty source.
    pub fn sum_by<S, F>(&self, selector: F) -> S
    where
        S: Zero + AddAssign,
        F: Fn(&T) -> S,
    {
        self.aggregate(S::zero(), |sum, item| *sum += selector(&item))
    }

    /// Fold every element into `seed`, which `f` updates in place.
    pub fn aggregate<A, F>(&self, seed: A, f: F) -> A
    where
        F: Fn(&mut A, T),
    {
        let mut accumulator = seed;
        self.for_each(|item| f(&mut accumulator, item));
        accumulator
    }

    /// The element with the smallest key; the first such element on ties.
    pub fn min_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut best: Option<(K, T)> = None;
        self.for_each(|item| {
            let candidate = key(&item);
            if best.as_ref().map_or(true, |(current, _)| candidate < *current) {
                best = Some((candidate, item));
            }
        });
        best.map(|(_, item)| item)
    }

    /// The element with the largest key; the first such element on ties.
    pub fn max_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut best: Option<(K, T)> = None;
        self.for_each(|item| {
            let candidate = key(&item);
            if best.as_ref().map_or(true, |(current, _)| candidate > *current) {
                best = Some((candidate, item));
            }
        });
        best.map(|(_, item)| item)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;

    use super::*;

    fn words() -> Enumeration<'static, &'static str> {
        Enumeration::from_vec(vec!["pear", "fig", "apple", "kiwi", "plum"])
    }

    #[test]
    fn test_count() {
        assert_eq!(words().count(), 5);
        assert_eq!(Enumeration::<i32>::absent().count(), 0);
        assert_eq!(words().count_with(|w| w.len() == 4), 3);
    }

    #[test]
    fn test_sum_by() {
        assert_eq!(words().sum_by(|w| w.len()), 20);
        assert_eq!(Enumeration::<&str>::empty().sum_by(|w| w.len() as f64), 0.0);
    }

    #[test]
    fn test_aggregate() {
        let joined = words().aggregate(String::new(), |acc, w| {
            if !acc.is_empty() {
                acc.push(',');
            }
            acc.push_str(w);
        });
        assert_eq!(joined, "pear,fig,apple,kiwi,plum");
        assert_eq!(Enumeration::<i32>::absent().aggregate(10, |a, b| *a += b), 10);
        assert_eq!(words().aggregate(0, |total, w| *total += w.len()), 20);
    }

    #[test]
    fn test_min_and_max_by_key_take_first_on_ties() {
        assert_eq!(words().min_by_key(|w| w.len()), Some("fig"));
        assert_eq!(words().max_by_key(|w| w.len()), Some("apple"));
        assert_eq!(words().filter(|w| w.len() == 4).max_by_key(|w| w.len()), Some("pear"));
        assert_eq!(Enumeration::<i32>::empty().min_by_key(|i| *i), None);
    }

    #[test]
    fn test_to_map() {
        let map = words().to_map(|w| w.len(), |w| w.to_uppercase());
        let mut entries = map.into_iter().collect::<Vec<_>>();
        entries.sort();
        assert_debug_snapshot!(entries, @r#"
        [
            (
                3,
                "FIG",
            ),
            (
                4,
                "PLUM",
            ),
            (
                5,
                "APPLE",
            ),
        ]
        "#);
    }
}
