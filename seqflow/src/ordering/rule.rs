use std::cmp::Ordering;
use std::marker::PhantomData;
use std::rc::Rc;

/// One link in a sort rule chain.
///
/// A rule does nothing until a materialization asks it to `prepare` for a
/// concrete buffer of items. Preparing is where a key rule extracts its
/// keys, once per item.
pub(crate) trait SortRule<'a, T> {
    fn prepare(&self, items: &[T]) -> Box<dyn SortKeys<T> + 'a>;
}

/// A rule prepared for one buffer. Items are referred to by their index in
/// that buffer.
pub(crate) trait SortKeys<T> {
    fn compare(&self, items: &[T], a: usize, b: usize) -> Ordering;
}

pub(crate) struct KeyRule<F, K> {
    key: F,
    descending: bool,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> KeyRule<F, K> {
    pub(crate) fn new<T>(key: F, descending: bool) -> Self
    where
        F: Fn(&T) -> K,
    {
        Self {
            key,
            descending,
            _key: PhantomData,
        }
    }
}

impl<'a, T, F, K> SortRule<'a, T> for KeyRule<F, K>
where
    F: Fn(&T) -> K,
    K: Ord + 'a,
{
    fn prepare(&self, items: &[T]) -> Box<dyn SortKeys<T> + 'a> {
        Box::new(KeyColumn {
            keys: items.iter().map(&self.key).collect(),
            descending: self.descending,
        })
    }
}

struct KeyColumn<K> {
    keys: Vec<K>,
    descending: bool,
}

impl<T, K: Ord> SortKeys<T> for KeyColumn<K> {
    fn compare(&self, _items: &[T], a: usize, b: usize) -> Ordering {
        let ordering = self.keys[a].cmp(&self.keys[b]);
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// A rule that compares items directly.
pub(crate) struct CompareRule<F> {
    compare: Rc<F>,
}

impl<F> CompareRule<F> {
    pub(crate) fn new(compare: F) -> Self {
        Self {
            compare: Rc::new(compare),
        }
    }
}

impl<'a, T, F> SortRule<'a, T> for CompareRule<F>
where
    F: Fn(&T, &T) -> Ordering + 'a,
{
    fn prepare(&self, _items: &[T]) -> Box<dyn SortKeys<T> + 'a> {
        Box::new(CompareRule {
            compare: self.compare.clone(),
        })
    }
}

impl<T, F> SortKeys<T> for CompareRule<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, items: &[T], a: usize, b: usize) -> Ordering {
        (self.compare)(&items[a], &items[b])
    }
}
