// Ways to create an enumeration from data that already exists.

use std::ops::ControlFlow;
use std::rc::Rc;

use super::Enumeration;

impl<'a, T: 'a> Enumeration<'a, T> {
    /// An enumeration that is present but produces nothing.
    pub fn empty() -> Self {
        Enumeration::new(|_| ControlFlow::Continue(()))
    }

    /// Enumerate an owned buffer, cloning each element as it is produced.
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone,
    {
        let items: Rc<[T]> = items.into();
        Enumeration::new(move |visit| items.iter().cloned().try_for_each(&mut *visit))
    }

    /// Enumerate whatever `factory` returns. The factory is called again
    /// for every visit, so the iterator it makes may well be infinite.
    pub fn from_fn<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: IntoIterator<Item = T>,
    {
        Enumeration::new(move |visit| factory().into_iter().try_for_each(&mut *visit))
    }

    /// A single element.
    pub fn once(value: T) -> Self
    where
        T: Clone,
    {
        Enumeration::new(move |visit| visit(value.clone()))
    }

    /// `value`, `count` times.
    pub fn repeat(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Enumeration::new(move |visit| {
            for _ in 0..count {
                visit(value.clone())?;
            }
            ControlFlow::Continue(())
        })
    }
}

impl<'a, T: 'a> Enumeration<'a, &'a T> {
    /// Enumerate a borrowed slice by reference.
    pub fn from_slice(items: &'a [T]) -> Self {
        Enumeration::new(move |visit| items.iter().try_for_each(&mut *visit))
    }
}

impl Enumeration<'_, i64> {
    /// `count` consecutive integers starting at `start`.
    ///
    /// Production stops early rather than overflow.
    pub fn range(start: i64, count: usize) -> Self {
        Enumeration::new(move |visit| {
            let mut current = start;
            for i in 0..count {
                visit(current)?;
                if i + 1 < count {
                    match current.checked_add(1) {
                        Some(next) => current = next,
                        None => break,
                    }
                }
            }
            ControlFlow::Continue(())
        })
    }
}

impl<'a, T: Clone + 'a> From<Vec<T>> for Enumeration<'a, T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Enumeration<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
