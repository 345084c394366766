use std::ops::AddAssign;

use num_traits::{ToPrimitive, Zero};

use crate::Enumeration;

/// A numeric key that can be averaged.
///
/// Keys are summed in a wider accumulator so that many large inputs don't
/// overflow or lose precision: signed integers in `i128`, unsigned ones in
/// `u128` and floats in `f64`.
pub trait Average: Copy {
    type Accumulator: Zero + AddAssign + ToPrimitive;

    fn widen(self) -> Self::Accumulator;
}

macro_rules! average_impl {
    ($accumulator:ty: $($t:ty),*) => {
        $(
            impl Average for $t {
                type Accumulator = $accumulator;

                #[inline]
                fn widen(self) -> $accumulator {
                    self as $accumulator
                }
            }
        )*
    };
}

average_impl!(i128: i8, i16, i32, i64, isize);
average_impl!(u128: u8, u16, u32, u64, usize);
average_impl!(f64: f32, f64);

impl<'a, T: 'a> Enumeration<'a, T> {
    /// The arithmetic mean of `selector` over every element.
    ///
    /// Returns `None` if the source is absent or empty, or if there is no
    /// selector. The selector is called exactly once per element, and
    /// every element is produced.
    pub fn average_by<K, F>(&self, selector: Option<F>) -> Option<f64>
    where
        K: Average,
        F: Fn(&T) -> K,
    {
        let selector = selector?;
        let (sum, count) = self.aggregate((K::Accumulator::zero(), 0usize), |(sum, count), item| {
            *sum += selector(&item).widen();
            *count += 1;
        });
        if count == 0 {
            return None;
        }
        Some(sum.to_f64()? / count as f64)
    }

    pub fn average_int<F>(&self, selector: Option<F>) -> Option<f64>
    where
        F: Fn(&T) -> i32,
    {
        self.average_by(selector)
    }

    pub fn average_int64<F>(&self, selector: Option<F>) -> Option<f64>
    where
        F: Fn(&T) -> i64,
    {
        self.average_by(selector)
    }

    pub fn average_float<F>(&self, selector: Option<F>) -> Option<f64>
    where
        F: Fn(&T) -> f32,
    {
        self.average_by(selector)
    }

    pub fn average_float64<F>(&self, selector: Option<F>) -> Option<f64>
    where
        F: Fn(&T) -> f64,
    {
        self.average_by(selector)
    }
}
