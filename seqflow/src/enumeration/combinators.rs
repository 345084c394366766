// Lazy, element-at-a-time combinators. Each one wraps its source's producer
// in a new producer; nothing runs until the result is visited. Any state a
// combinator needs (a counter, a flag) lives inside the producer call so
// that every visit starts fresh.
//
// An absent source stays absent: it produces nothing either way, and
// operators that care about the difference can still see it.

use std::ops::ControlFlow;

use super::core::drive;
use super::Enumeration;

impl<'a, T: 'a> Enumeration<'a, T> {
    /// Only the elements for which `predicate` holds.
    pub fn filter<P>(&self, predicate: P) -> Enumeration<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        Enumeration::new(move |visit| {
            source(&mut |item| {
                if predicate(&item) {
                    visit(item)
                } else {
                    ControlFlow::Continue(())
                }
            })
        })
    }

    /// Project every element through `selector`.
    pub fn map<U, F>(&self, selector: F) -> Enumeration<'a, U>
    where
        U: 'a,
        F: Fn(T) -> U + 'a,
    {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        Enumeration::new(move |visit| source(&mut |item| visit(selector(item))))
    }

    /// Project every element into an enumeration and produce the elements
    /// of all of those in turn.
    pub fn flat_map<U, F>(&self, selector: F) -> Enumeration<'a, U>
    where
        U: 'a,
        F: Fn(T) -> Enumeration<'a, U> + 'a,
    {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        Enumeration::new(move |visit| source(&mut |item| selector(item).visit(&mut *visit)))
    }

    /// The elements of `self` followed by those of `other`.
    pub fn concat(&self, other: &Enumeration<'a, T>) -> Enumeration<'a, T> {
        match (self.producer(), other.producer()) {
            (None, None) => Enumeration::absent(),
            (Some(_), None) => self.clone(),
            (None, Some(_)) => other.clone(),
            (Some(first), Some(second)) => Enumeration::new(move |visit| {
                drive(&*first, visit)?;
                drive(&*second, visit)
            }),
        }
    }

    /// At most the first `count` elements.
    ///
    /// Upstream production stops as soon as the last wanted element has
    /// been handed on.
    pub fn take(&self, count: usize) -> Enumeration<'a, T> {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        Enumeration::new(move |visit| {
            if count == 0 {
                return ControlFlow::Continue(());
            }
            let mut remaining = count;
            let mut stopped = false;
            let _ = source(&mut |item| {
                remaining -= 1;
                if visit(item).is_break() {
                    stopped = true;
                    return ControlFlow::Break(());
                }
                if remaining == 0 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
            // running out of wanted elements is a natural end, not a stop
            if stopped {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// All but the first `count` elements.
    pub fn skip(&self, count: usize) -> Enumeration<'a, T> {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        Enumeration::new(move |visit| {
            let mut remaining = count;
            source(&mut |item| {
                if remaining > 0 {
                    remaining -= 1;
                    ControlFlow::Continue(())
                } else {
                    visit(item)
                }
            })
        })
    }

    /// Elements up to, not including, the first for which `predicate`
    /// fails.
    pub fn take_while<P>(&self, predicate: P) -> Enumeration<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        Enumeration::new(move |visit| {
            let mut stopped = false;
            let _ = source(&mut |item| {
                if !predicate(&item) {
                    return ControlFlow::Break(());
                }
                if visit(item).is_break() {
                    stopped = true;
                    return ControlFlow::Break(());
                }
                ControlFlow::Continue(())
            });
            if stopped {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// Elements from the first for which `predicate` fails onwards.
    pub fn skip_while<P>(&self, predicate: P) -> Enumeration<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        Enumeration::new(move |visit| {
            let mut skipping = true;
            source(&mut |item| {
                if skipping && predicate(&item) {
                    return ControlFlow::Continue(());
                }
                skipping = false;
                visit(item)
            })
        })
    }

    /// The source's elements, or just `value` if the source produces none.
    pub fn default_if_empty(&self, value: T) -> Enumeration<'a, T>
    where
        T: Clone,
    {
        let source = self.clone();
        Enumeration::new(move |visit| {
            let mut any = false;
            source.visit(|item| {
                any = true;
                visit(item)
            })?;
            if any {
                ControlFlow::Continue(())
            } else {
                visit(value.clone())
            }
        })
    }

    /// The elements in reverse order.
    ///
    /// This has to buffer the whole source when visited.
    pub fn reverse(&self) -> Enumeration<'a, T> {
        let Some(source) = self.producer() else {
            return Enumeration::absent();
        };
        Enumeration::new(move |visit| {
            let mut buffer = Vec::new();
            let _ = source(&mut |item| {
                buffer.push(item);
                ControlFlow::Continue(())
            });
            tracing::trace!(buffered = buffer.len(), "reverse materialized");
            buffer.into_iter().rev().try_for_each(&mut *visit)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn numbers() -> Enumeration<'static, i32> {
        Enumeration::from_vec(vec![1, 2, 3, 4, 5, 6])
    }

    // counts how many elements the source had to produce
    fn naturals(produced: &Cell<usize>) -> Enumeration<'_, usize> {
        Enumeration::from_fn(|| 0..).map(move |i| {
            produced.set(produced.get() + 1);
            i
        })
    }

    #[test]
    fn test_filter() {
        assert_eq!(numbers().filter(|i| i % 2 == 0).to_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn test_map() {
        assert_eq!(
            numbers().map(|i| i.to_string()).take(2).to_vec(),
            vec!["1".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn test_flat_map() {
        let enumeration = Enumeration::from_vec(vec![1, 2, 3])
            .flat_map(|i| Enumeration::repeat(i, i as usize));
        assert_eq!(enumeration.to_vec(), vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_flat_map_stops_inside_inner() {
        let produced = Cell::new(0);
        let enumeration = naturals(&produced).flat_map(|i| Enumeration::repeat(i, 3));
        assert_eq!(enumeration.take(4).to_vec(), vec![0, 0, 0, 1]);
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn test_concat() {
        let a = Enumeration::from_vec(vec![1, 2]);
        let b = Enumeration::from_vec(vec![3]);
        assert_eq!(a.concat(&b).to_vec(), vec![1, 2, 3]);
        assert_eq!(a.concat(&Enumeration::absent()).to_vec(), vec![1, 2]);
        assert_eq!(Enumeration::absent().concat(&b).to_vec(), vec![3]);
        assert!(Enumeration::<i32>::absent()
            .concat(&Enumeration::absent())
            .is_absent());
    }

    #[test]
    fn test_concat_stops_after_quiet_first_half() {
        // a source that stops when asked without saying so
        let quiet = Enumeration::new(|visit| {
            for i in [1, 2, 3] {
                if visit(i).is_break() {
                    break;
                }
            }
            ControlFlow::Continue(())
        });
        let mut seen = Vec::new();
        let flow = quiet.concat(&Enumeration::from_vec(vec![10, 20])).visit(|i| {
            seen.push(i);
            ControlFlow::Break(())
        });
        assert!(flow.is_break());
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_concat_after_take_continues() {
        let a = numbers().take(2);
        let b = Enumeration::from_vec(vec![10]);
        assert_eq!(a.concat(&b).to_vec(), vec![1, 2, 10]);
    }

    #[test]
    fn test_take_stops_upstream() {
        let produced = Cell::new(0);
        assert_eq!(naturals(&produced).take(3).to_vec(), vec![0, 1, 2]);
        assert_eq!(produced.get(), 3);
    }

    #[test]
    fn test_take_zero_produces_nothing() {
        let produced = Cell::new(0);
        assert!(naturals(&produced).take(0).to_vec().is_empty());
        assert_eq!(produced.get(), 0);
    }

    #[test]
    fn test_break_propagates_through_layers() {
        let produced = Cell::new(0);
        let enumeration = naturals(&produced)
            .filter(|i| i % 2 == 1)
            .map(|i| i * 10)
            .skip(1);
        let mut seen = Vec::new();
        let flow = enumeration.visit(|i| {
            seen.push(i);
            ControlFlow::Break(())
        });
        assert!(flow.is_break());
        assert_eq!(seen, vec![30]);
        // 0, 1, 2, 3 and nothing more
        assert_eq!(produced.get(), 4);
    }

    #[test]
    fn test_skip() {
        assert_eq!(numbers().skip(4).to_vec(), vec![5, 6]);
        assert!(numbers().skip(10).to_vec().is_empty());
    }

    #[test]
    fn test_take_while() {
        let produced = Cell::new(0);
        assert_eq!(
            naturals(&produced).take_while(|i| *i < 3).to_vec(),
            vec![0, 1, 2]
        );
        assert_eq!(produced.get(), 4);
    }

    #[test]
    fn test_skip_while() {
        let enumeration = Enumeration::from_vec(vec![1, 2, 5, 1, 7]);
        assert_eq!(enumeration.skip_while(|i| *i < 3).to_vec(), vec![5, 1, 7]);
    }

    #[test]
    fn test_default_if_empty() {
        assert_eq!(
            Enumeration::<i32>::empty().default_if_empty(9).to_vec(),
            vec![9]
        );
        assert_eq!(
            Enumeration::<i32>::absent().default_if_empty(9).to_vec(),
            vec![9]
        );
        assert_eq!(numbers().take(2).default_if_empty(9).to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(numbers().reverse().take(2).to_vec(), vec![6, 5]);
        assert!(Enumeration::<i32>::absent().reverse().is_absent());
    }

    #[test]
    fn test_lazy_until_visited() {
        let produced = Cell::new(0);
        let enumeration = naturals(&produced).filter(|_| true).map(|i| i + 1);
        assert_eq!(produced.get(), 0);
        assert_eq!(enumeration.first(), Ok(1));
        assert_eq!(produced.get(), 1);
    }

    #[test]
    fn test_absent_stays_absent() {
        let absent = Enumeration::<i32>::absent();
        assert!(absent.filter(|_| true).is_absent());
        assert!(absent.map(|i| i + 1).is_absent());
        assert!(absent.take(3).is_absent());
        assert!(absent.skip(3).is_absent());
        assert!(absent.to_vec().is_empty());
    }
}
