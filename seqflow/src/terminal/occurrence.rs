use std::ops::ControlFlow;

use crate::error;

/// How many elements a source turned out to have, as far as an
/// exactly-one check cares.
///
/// Fed element by element, it asks for production to stop as soon as a
/// second element shows up, so no more than two elements are ever pulled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Occurrence<T> {
    Empty,
    One(T),
    Many,
}

impl<T> Occurrence<T> {
    pub(crate) fn push(&mut self, item: T) -> ControlFlow<()> {
        match self {
            Occurrence::Empty => {
                *self = Occurrence::One(item);
                ControlFlow::Continue(())
            }
            _ => {
                *self = Occurrence::Many;
                ControlFlow::Break(())
            }
        }
    }

    pub(crate) fn one(self) -> error::Result<T> {
        match self {
            Occurrence::Empty => Err(error::Error::EmptySource),
            Occurrence::One(item) => Ok(item),
            Occurrence::Many => Err(error::Error::MultipleElementsFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_breaks_on_second() {
        let mut occurrence = Occurrence::Empty;
        assert!(occurrence.push(1).is_continue());
        assert_eq!(occurrence, Occurrence::One(1));
        assert!(occurrence.push(2).is_break());
        assert_eq!(occurrence, Occurrence::Many);
    }

    #[test]
    fn test_one() {
        assert_eq!(Occurrence::<i32>::Empty.one(), Err(error::Error::EmptySource));
        assert_eq!(Occurrence::One(4).one(), Ok(4));
        assert_eq!(
            Occurrence::<i32>::Many.one(),
            Err(error::Error::MultipleElementsFound)
        );
    }
}
