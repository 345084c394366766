// Terminals that pick out a single element.

use std::ops::ControlFlow;

use crate::error;
use crate::Enumeration;

use super::occurrence::Occurrence;

impl<'a, T: 'a> Enumeration<'a, T> {
    /// The first element. Only that one element is produced.
    pub fn first(&self) -> error::Result<T> {
        let mut first = None;
        let _ = self.visit(|item| {
            first = Some(item);
            ControlFlow::Break(())
        });
        first.ok_or(error::Error::EmptySource)
    }

    pub fn first_or_default(&self, default: T) -> T {
        self.first().unwrap_or(default)
    }

    /// The last element. The whole source is produced.
    pub fn last(&self) -> error::Result<T> {
        let mut last = None;
        self.for_each(|item| last = Some(item));
        last.ok_or(error::Error::EmptySource)
    }

    pub fn last_or_default(&self, default: T) -> T {
        self.last().unwrap_or(default)
    }

    /// The one and only element.
    ///
    /// Fails with [`error::Error::EmptySource`] if there is none and with
    /// [`error::Error::MultipleElementsFound`] if there is more than one.
    /// No more than two elements are produced, so this is safe to use on
    /// an infinite source.
    pub fn single(&self) -> error::Result<T> {
        let mut occurrence = Occurrence::Empty;
        let _ = self.visit(|item| occurrence.push(item));
        occurrence.one()
    }

    /// The one and only element, or `default` when there isn't exactly one.
    pub fn single_or_default(&self, default: T) -> T {
        self.single().unwrap_or(default)
    }

    /// The one and only element that matches `predicate`.
    ///
    /// Production stops at the second match.
    pub fn single_with<P>(&self, predicate: P) -> error::Result<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut occurrence = Occurrence::Empty;
        let _ = self.visit(|item| {
            if predicate(&item) {
                occurrence.push(item)
            } else {
                ControlFlow::Continue(())
            }
        });
        occurrence.one()
    }

    /// The element at zero-based `index`, if the source is long enough.
    /// Production stops right after it.
    pub fn element_at(&self, index: usize) -> Option<T> {
        let mut remaining = index;
        let mut found = None;
        let _ = self.visit(|item| {
            if remaining == 0 {
                found = Some(item);
                return ControlFlow::Break(());
            }
            remaining -= 1;
            ControlFlow::Continue(())
        });
        found
    }

    pub fn element_at_or_default(&self, index: usize, default: T) -> T {
        self.element_at(index).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rstest::rstest;

    use super::*;
    use crate::error::Error;

    fn from(items: &[i32]) -> Enumeration<'static, i32> {
        Enumeration::from_vec(items.to_vec())
    }

    fn counted(produced: &Cell<usize>) -> Enumeration<'_, i32> {
        Enumeration::from_fn(|| 1..).map(move |i| {
            produced.set(produced.get() + 1);
            i
        })
    }

    #[test]
    fn test_first() {
        assert_eq!(from(&[3, 4]).first(), Ok(3));
        assert_eq!(from(&[]).first(), Err(Error::EmptySource));
        assert_eq!(Enumeration::<i32>::absent().first(), Err(Error::EmptySource));
        assert_eq!(from(&[]).first_or_default(7), 7);
    }

    #[test]
    fn test_first_produces_one_element() {
        let produced = Cell::new(0);
        assert_eq!(counted(&produced).first(), Ok(1));
        assert_eq!(produced.get(), 1);
    }

    #[test]
    fn test_last() {
        assert_eq!(from(&[3, 4, 5]).last(), Ok(5));
        assert_eq!(from(&[]).last(), Err(Error::EmptySource));
        assert_eq!(from(&[]).last_or_default(-1), -1);
    }

    #[rstest]
    #[case(vec![], Err(Error::EmptySource))]
    #[case(vec![8], Ok(8))]
    #[case(vec![1, 2], Err(Error::MultipleElementsFound))]
    #[case(vec![1, 2, 3], Err(Error::MultipleElementsFound))]
    fn test_single(#[case] items: Vec<i32>, #[case] expected: error::Result<i32>) {
        assert_eq!(Enumeration::from_vec(items).single(), expected);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![8], 8)]
    #[case(vec![1, 2, 3], 0)]
    fn test_single_or_default(#[case] items: Vec<i32>, #[case] expected: i32) {
        assert_eq!(Enumeration::from_vec(items).single_or_default(0), expected);
    }

    #[test]
    fn test_single_absent_is_empty() {
        assert_eq!(
            Enumeration::<i32>::absent().single(),
            Err(Error::EmptySource)
        );
    }

    #[test]
    fn test_single_stops_after_two() {
        let produced = Cell::new(0);
        assert_eq!(
            counted(&produced).single(),
            Err(Error::MultipleElementsFound)
        );
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn test_single_with() {
        let numbers = from(&[1, 2, 3, 4]);
        assert_eq!(numbers.single_with(|i| *i == 3), Ok(3));
        assert_eq!(numbers.single_with(|i| *i > 9), Err(Error::EmptySource));
        assert_eq!(
            numbers.single_with(|i| i % 2 == 0),
            Err(Error::MultipleElementsFound)
        );
    }

    #[test]
    fn test_single_with_stops_at_second_match() {
        let produced = Cell::new(0);
        assert_eq!(
            counted(&produced).single_with(|i| i % 3 == 0),
            Err(Error::MultipleElementsFound)
        );
        assert_eq!(produced.get(), 6);
    }

    #[test]
    fn test_element_at() {
        let produced = Cell::new(0);
        assert_eq!(counted(&produced).element_at(2), Some(3));
        assert_eq!(produced.get(), 3);
        assert_eq!(from(&[1]).element_at(1), None);
        assert_eq!(from(&[1]).element_at_or_default(5, 42), 42);
    }
}
