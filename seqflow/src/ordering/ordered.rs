// Deferred, multi-key ordering. An Ordered value is an enumeration plus a
// chain of sort rules. Adding a rule only records it. The sort itself
// happens when the ordered sequence is consumed: the source is buffered,
// every rule prepares its keys for that buffer, and one stable sort over
// the buffer's indices applies the rules in registration order. Items that
// all rules consider equal keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::ops::ControlFlow;
use std::rc::Rc;

use crate::error;
use crate::Enumeration;

use super::rule::{CompareRule, KeyRule, SortKeys, SortRule};

type Rule<'a, T> = Rc<dyn SortRule<'a, T> + 'a>;

/// An enumeration with a pending sort.
///
/// Created by [`Enumeration::order_by`] and its siblings; refined with
/// [`Ordered::then_by`] and friends.
pub struct Ordered<'a, T> {
    source: Enumeration<'a, T>,
    rules: Vec<Rule<'a, T>>,
}

impl<'a, T: 'a> Enumeration<'a, T> {
    /// Order by ascending `key`.
    pub fn order_by<K, F>(&self, key: F) -> Ordered<'a, T>
    where
        K: Ord + 'a,
        F: Fn(&T) -> K + 'a,
    {
        Ordered::new(self.clone(), Rc::new(KeyRule::new(key, false)))
    }

    /// Order by descending `key`.
    pub fn order_by_descending<K, F>(&self, key: F) -> Ordered<'a, T>
    where
        K: Ord + 'a,
        F: Fn(&T) -> K + 'a,
    {
        Ordered::new(self.clone(), Rc::new(KeyRule::new(key, true)))
    }

    /// Order with a comparison function.
    pub fn order_by_with<F>(&self, compare: F) -> Ordered<'a, T>
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Ordered::new(self.clone(), Rc::new(CompareRule::new(compare)))
    }
}

impl<'a, T: 'a> Ordered<'a, T> {
    fn new(source: Enumeration<'a, T>, rule: Rule<'a, T>) -> Self {
        Self {
            source,
            rules: vec![rule],
        }
    }

    /// Break ties by ascending `key`.
    pub fn then_by<K, F>(mut self, key: F) -> Self
    where
        K: Ord + 'a,
        F: Fn(&T) -> K + 'a,
    {
        self.rules.push(Rc::new(KeyRule::new(key, false)));
        self
    }

    /// Break ties by descending `key`.
    pub fn then_by_descending<K, F>(mut self, key: F) -> Self
    where
        K: Ord + 'a,
        F: Fn(&T) -> K + 'a,
    {
        self.rules.push(Rc::new(KeyRule::new(key, true)));
        self
    }

    /// Break ties with a comparison function.
    pub fn then_with<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        self.rules.push(Rc::new(CompareRule::new(compare)));
        self
    }

    /// Sort and push every element, in order, into `visitor`.
    pub fn visit<V>(&self, mut visitor: V) -> ControlFlow<()>
    where
        V: FnMut(T) -> ControlFlow<()>,
    {
        sorted(&self.source, &self.rules)
            .into_iter()
            .try_for_each(&mut visitor)
    }

    /// The sorted elements.
    pub fn to_vec(&self) -> Vec<T> {
        sorted(&self.source, &self.rules)
    }

    /// The smallest element by the rule chain; the earliest one on ties.
    ///
    /// This takes a single pass over the buffer instead of a full sort.
    pub fn first(&self) -> error::Result<T> {
        self.extreme(false)
    }

    /// The largest element by the rule chain; the latest one on ties.
    pub fn last(&self) -> error::Result<T> {
        self.extreme(true)
    }

    /// A lazy enumeration of the sorted elements. The sort is run again on
    /// every visit.
    pub fn into_enumeration(self) -> Enumeration<'a, T> {
        Enumeration::new(move |visit| self.visit(&mut *visit))
    }

    // The remaining terminals only depend on how many elements there are,
    // which sorting doesn't change, so they skip it.

    pub fn single(&self) -> error::Result<T> {
        self.source.single()
    }

    pub fn single_or_default(&self, default: T) -> T {
        self.source.single_or_default(default)
    }

    pub fn any(&self) -> bool {
        self.source.any()
    }

    pub fn count(&self) -> usize {
        self.source.count()
    }

    fn extreme(&self, last: bool) -> error::Result<T> {
        let mut items = self.source.to_vec();
        let keys = prepare(&self.rules, &items);
        let mut best: Option<usize> = None;
        for index in 0..items.len() {
            let better = match best {
                None => true,
                Some(current) => {
                    let ordering = compare(&keys, &items, index, current);
                    if last {
                        ordering.is_ge()
                    } else {
                        ordering.is_lt()
                    }
                }
            };
            if better {
                best = Some(index);
            }
        }
        match best {
            Some(index) => Ok(items.swap_remove(index)),
            None => Err(error::Error::EmptySource),
        }
    }
}

impl<T> Clone for Ordered<'_, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T> fmt::Debug for Ordered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ordered")
            .field("source", &self.source)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<'a, T: 'a> From<Ordered<'a, T>> for Enumeration<'a, T> {
    fn from(ordered: Ordered<'a, T>) -> Self {
        ordered.into_enumeration()
    }
}

fn prepare<'a, T>(rules: &[Rule<'a, T>], items: &[T]) -> Vec<Box<dyn SortKeys<T> + 'a>> {
    rules.iter().map(|rule| rule.prepare(items)).collect()
}

fn compare<T>(keys: &[Box<dyn SortKeys<T> + '_>], items: &[T], a: usize, b: usize) -> Ordering {
    keys.iter()
        .fold(Ordering::Equal, |ordering, rule| {
            ordering.then_with(|| rule.compare(items, a, b))
        })
}

fn sorted<'a, T: 'a>(source: &Enumeration<'a, T>, rules: &[Rule<'a, T>]) -> Vec<T> {
    let items = source.to_vec();
    let keys = prepare(rules, &items);
    let mut order = (0..items.len()).collect::<Vec<_>>();
    // sort_by is stable, so the input order is the final tie-break
    order.sort_by(|&a, &b| compare(&keys, &items, a, b));
    tracing::trace!(elements = items.len(), rules = rules.len(), "sort materialized");
    let mut slots = items.into_iter().map(Some).collect::<Vec<_>>();
    order
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}
