use std::ops::ControlFlow;

use seqflow_hash::Comparer;

use crate::Enumeration;

impl<'a, T: 'a> Enumeration<'a, T> {
    /// Whether the source produces any element at all.
    ///
    /// At most one element is produced.
    pub fn any(&self) -> bool {
        self.visit(|_| ControlFlow::Break(())).is_break()
    }

    /// Whether some element matches `predicate`. Production stops at the
    /// first match.
    pub fn any_with<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.visit(|item| {
            if predicate(&item) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Whether every element matches `predicate`; `true` for an empty
    /// source. Production stops at the first mismatch.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.visit(|item| {
            if predicate(&item) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.any_with(|item| item == value)
    }

    /// Like [`Enumeration::contains`], with equality from `comparer`.
    /// Without a comparer nothing is contained.
    pub fn contains_by<C>(&self, value: &T, comparer: Option<C>) -> bool
    where
        C: Comparer<T>,
    {
        match comparer {
            Some(comparer) => self.any_with(|item| comparer.equals(item, value)),
            None => false,
        }
    }
}
