use super::{Abs, ComplexParts};
use sealed::sealed;
use std::ops::{Add, Sub};

/// A summation strategy marker.
///
/// This trait is sealed: the three strategies [`Real`], [`Complex`] and
/// [`Generic`] are the only ones.
#[sealed]
pub trait Strategy {
    /// A human-readable name of the algorithm, used in log messages.
    const ALGORITHM: &'static str;
}

/// The update rule of a [`Strategy`] for raw values of type `V`.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` summation strategy cannot be applied to `{V}`",
    note = "`Real` requires `PartialOrd` and `Abs`, `Complex` requires `ComplexParts`, and both require `Copy` and binary `+` and `-`"
)]
pub trait Summation<V>: Strategy {
    /// Returns the amount to add to the running compensation when
    /// `increment` is added to `sum`, yielding `naive_sum`.
    fn correction(sum: V, increment: V, naive_sum: V) -> V;
}

/// The Kahan–Neumaier algorithm for totally ordered types with an absolute
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Real;

/// The Kahan–Neumaier algorithm applied separately to the real and
/// imaginary parts of a [complex-like](ComplexParts) type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Complex;

/// The plain Kahan algorithm, for types with nothing more than `+` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generic;

#[sealed]
impl Strategy for Real {
    const ALGORITHM: &'static str = "Kahan–Neumaier";
}

#[sealed]
impl Strategy for Complex {
    const ALGORITHM: &'static str = "component-wise Kahan–Neumaier";
}

#[sealed]
impl Strategy for Generic {
    const ALGORITHM: &'static str = "Kahan";
}

impl<V> Summation<V> for Real
where
    V: Copy + Add<Output = V> + Sub<Output = V> + PartialOrd + Abs,
{
    #[inline(always)]
    fn correction(sum: V, increment: V, naive_sum: V) -> V {
        // The low-order bits lost by the addition are recovered by cancelling
        // the naive sum against the addend of larger magnitude; ties cancel
        // against the sum.
        if sum.abs() >= increment.abs() {
            (sum - naive_sum) + increment
        } else {
            (increment - naive_sum) + sum
        }
    }
}

impl<V> Summation<V> for Complex
where
    V: Copy + Add<Output = V> + Sub<Output = V> + ComplexParts,
{
    #[inline(always)]
    fn correction(sum: V, increment: V, naive_sum: V) -> V {
        let re = Real::correction(sum.re(), increment.re(), naive_sum.re());
        let im = Real::correction(sum.im(), increment.im(), naive_sum.im());
        V::from_parts(re, im)
    }
}

impl<V> Summation<V> for Generic
where
    V: Copy + Add<Output = V> + Sub<Output = V>,
{
    #[inline(always)]
    fn correction(sum: V, increment: V, naive_sum: V) -> V {
        (sum - naive_sum) + increment
    }
}
