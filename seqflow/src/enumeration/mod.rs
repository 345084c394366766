mod combinators;
mod core;
mod creation;
mod set;

pub use self::core::{Enumeration, Visitor};
