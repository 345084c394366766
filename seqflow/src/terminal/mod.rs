// Terminal operations drive an enumeration and return a plain value.

mod aggregate;
mod average;
mod element;
mod occurrence;
mod quantifier;

pub use average::Average;
