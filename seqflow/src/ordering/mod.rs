mod ordered;
mod rule;

pub use ordered::Ordered;
