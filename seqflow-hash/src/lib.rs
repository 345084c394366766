//! Equality capabilities and a hash set keyed by them.
//!
//! Types that don't implement [`Eq`] and [`Hash`](std::hash::Hash), or that
//! need a different notion of equality than the one they carry, can still be
//! deduplicated by supplying a [`Comparer`]. The [`HashSet`] in this crate
//! never treats equal hashes as proof of equality.
mod comparer;
mod hash_set;

pub use comparer::{Comparer, DefaultComparer, FnComparer, KeyComparer};
pub use hash_set::{HashSet, Iter};
