//! Lazily evaluated, push-based sequences.
//!
//! An [`Enumeration`] is a producer that pushes elements one at a time into
//! a visitor; the visitor can stop production early by returning
//! [`ControlFlow::Break`](std::ops::ControlFlow::Break). Combinators wrap an
//! enumeration in another one without running anything. Terminal operations
//! such as [`Enumeration::single`], [`Enumeration::any`] or
//! [`Enumeration::average_int`] drive production and return a plain value.
//!
//! ```
//! use seqflow::Enumeration;
//!
//! let first = Enumeration::from_vec(vec![1, 2, 2, 3, 3, 4, 5]);
//! let second = Enumeration::from_vec(vec![2, 3, 4, 6]);
//! assert_eq!(first.intersect(&second).to_vec(), vec![2, 3, 4]);
//!
//! let sorted = first.order_by_descending(|i| *i).then_by(|i| *i);
//! assert_eq!(sorted.first(), Ok(5));
//! ```
//!
//! Elements without built-in equality can take part in set operations
//! through a [`Comparer`].
pub mod error;

mod enumeration;
mod ordering;
mod terminal;

pub use enumeration::{Enumeration, Visitor};
pub use ordering::Ordered;
pub use seqflow_hash::{Comparer, DefaultComparer, FnComparer, HashSet, KeyComparer};
pub use terminal::Average;
