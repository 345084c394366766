// Set algebra over enumerations: distinct, union, intersect and except.
//
// Each operator comes in two flavors. The native one works for elements
// with built-in Eq + Hash and uses an ahash set. The `_by` one takes an
// optional Comparer and uses seqflow_hash::HashSet, so it works for any
// element type; without a comparer it yields nothing.
//
// intersect and except buffer their second operand completely, once per
// visit, before the first operand is streamed. The first operand is only
// pulled as far as the consumer wants. All sets are local to a single
// visit and are dropped when it returns, early or not.

use std::hash::Hash;
use std::ops::ControlFlow;

use ahash::{HashSet, HashSetExt};
use seqflow_hash::Comparer;

use super::core::drive;
use super::Enumeration;

impl<'a, T: 'a> Enumeration<'a, T> {
    /// Each distinct element once, in order of first occurrence.
    pub fn distinct(&self) -> Enumeration<'a, T>
    where
        T: Eq + Hash + Clone,
    {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        Enumeration::new(move |visit| {
            let mut seen = HashSet::new();
            source(&mut |item| {
                if seen.insert(item.clone()) {
                    visit(item)
                } else {
                    ControlFlow::Continue(())
                }
            })
        })
    }

    /// Each distinct element of `self` and then of `other`, once, in order
    /// of first occurrence.
    pub fn union(&self, other: &Enumeration<'a, T>) -> Enumeration<'a, T>
    where
        T: Eq + Hash + Clone,
    {
        let first = self.producer();
        let second = other.producer();
        if first.is_none() && second.is_none() {
            return Enumeration::absent();
        }
        Enumeration::new(move |visit| {
            let mut seen = HashSet::new();
            let mut visit_new = |item: T| {
                if seen.insert(item.clone()) {
                    visit(item)
                } else {
                    ControlFlow::Continue(())
                }
            };
            for producer in [&first, &second].into_iter().flatten() {
                drive(&**producer, &mut visit_new)?;
            }
            ControlFlow::Continue(())
        })
    }

    /// The distinct elements of `self` that also occur in `second`, in
    /// order of their first occurrence in `self`.
    ///
    /// If either operand is absent the result is empty. `second` is
    /// buffered in full when the result is visited; `self` is streamed and
    /// stops being pulled once every element of `second` has been matched.
    pub fn intersect(&self, second: &Enumeration<'a, T>) -> Enumeration<'a, T>
    where
        T: Eq + Hash,
    {
        let (Some(first), Some(second)) = (self.producer(), second.producer()) else {
            return Enumeration::empty();
        };
        Enumeration::new(move |visit| {
            let mut candidates = HashSet::new();
            let _ = second(&mut |item| {
                candidates.insert(item);
                ControlFlow::Continue(())
            });
            tracing::trace!(buffered = candidates.len(), "intersect buffered second operand");
            if candidates.is_empty() {
                return ControlFlow::Continue(());
            }
            let mut stopped = false;
            let _ = first(&mut |item| {
                // a candidate is removed once yielded, so it can't repeat
                if !candidates.remove(&item) {
                    return ControlFlow::Continue(());
                }
                if visit(item).is_break() {
                    stopped = true;
                    return ControlFlow::Break(());
                }
                if candidates.is_empty() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
            if stopped {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// The distinct elements of `self` that don't occur in `second`, in
    /// order of first occurrence.
    ///
    /// An absent `self` gives an empty result; an absent `second` excludes
    /// nothing, so the result is `self.distinct()`.
    pub fn except(&self, second: &Enumeration<'a, T>) -> Enumeration<'a, T>
    where
        T: Eq + Hash + Clone,
    {
        let Some(first) = self.producer() else {
            return Enumeration::empty();
        };
        let second = second.producer();
        Enumeration::new(move |visit| {
            let mut excluded = HashSet::new();
            if let Some(second) = &second {
                let _ = second(&mut |item| {
                    excluded.insert(item);
                    ControlFlow::Continue(())
                });
            }
            tracing::trace!(buffered = excluded.len(), "except buffered second operand");
            // whatever is yielded joins the excluded set
            first(&mut |item| {
                if excluded.insert(item.clone()) {
                    visit(item)
                } else {
                    ControlFlow::Continue(())
                }
            })
        })
    }

    /// Like [`Enumeration::distinct`], with equality from `comparer`.
    ///
    /// An absent source stays absent; without a comparer the result is
    /// empty.
    pub fn distinct_by<C>(&self, comparer: Option<C>) -> Enumeration<'a, T>
    where
        T: Clone,
        C: Comparer<T> + 'a,
    {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        let Some(comparer) = comparer else {
            return Enumeration::empty();
        };
        Enumeration::new(move |visit| {
            let mut seen = seqflow_hash::HashSet::new(&comparer);
            source(&mut |item| {
                if seen.add(item.clone()) {
                    visit(item)
                } else {
                    ControlFlow::Continue(())
                }
            })
        })
    }

    /// Like [`Enumeration::union`], with equality from `comparer`.
    ///
    /// Two absent operands give an absent result; without a comparer the
    /// result is empty.
    pub fn union_by<C>(&self, other: &Enumeration<'a, T>, comparer: Option<C>) -> Enumeration<'a, T>
    where
        T: Clone,
        C: Comparer<T> + 'a,
    {
        let first = self.producer();
        let second = other.producer();
        if first.is_none() && second.is_none() {
            return Enumeration::absent();
        }
        let Some(comparer) = comparer else {
            return Enumeration::empty();
        };
        Enumeration::new(move |visit| {
            let mut seen = seqflow_hash::HashSet::new(&comparer);
            let mut visit_new = |item: T| {
                if seen.add(item.clone()) {
                    visit(item)
                } else {
                    ControlFlow::Continue(())
                }
            };
            for producer in [&first, &second].into_iter().flatten() {
                drive(&**producer, &mut visit_new)?;
            }
            ControlFlow::Continue(())
        })
    }

    /// Like [`Enumeration::intersect`], with equality from `comparer`.
    ///
    /// Without a comparer, or with either operand absent, the result is
    /// empty.
    pub fn intersect_by<C>(
        &self,
        second: &Enumeration<'a, T>,
        comparer: Option<C>,
    ) -> Enumeration<'a, T>
    where
        C: Comparer<T> + 'a,
    {
        let (Some(first), Some(second), Some(comparer)) =
            (self.producer(), second.producer(), comparer)
        else {
            return Enumeration::empty();
        };
        Enumeration::new(move |visit| {
            let mut candidates = seqflow_hash::HashSet::new(&comparer);
            let _ = second(&mut |item| {
                candidates.add(item);
                ControlFlow::Continue(())
            });
            tracing::trace!(buffered = candidates.len(), "intersect_by buffered second operand");
            if candidates.is_empty() {
                return ControlFlow::Continue(());
            }
            let mut stopped = false;
            let _ = first(&mut |item| {
                if !candidates.remove(&item) {
                    return ControlFlow::Continue(());
                }
                if visit(item).is_break() {
                    stopped = true;
                    return ControlFlow::Break(());
                }
                if candidates.is_empty() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
            if stopped {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// Like [`Enumeration::except`], with equality from `comparer`.
    ///
    /// Without a comparer, or with `self` absent, the result is empty.
    pub fn except_by<C>(&self, second: &Enumeration<'a, T>, comparer: Option<C>) -> Enumeration<'a, T>
    where
        T: Clone,
        C: Comparer<T> + 'a,
    {
        let (Some(first), Some(comparer)) = (self.producer(), comparer) else {
            return Enumeration::empty();
        };
        let second = second.producer();
        Enumeration::new(move |visit| {
            let mut excluded = seqflow_hash::HashSet::new(&comparer);
            if let Some(second) = &second {
                let _ = second(&mut |item| {
                    excluded.add(item);
                    ControlFlow::Continue(())
                });
            }
            tracing::trace!(buffered = excluded.len(), "except_by buffered second operand");
            first(&mut |item| {
                if excluded.add(item.clone()) {
                    visit(item)
                } else {
                    ControlFlow::Continue(())
                }
            })
        })
    }
}
