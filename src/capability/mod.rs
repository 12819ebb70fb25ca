/*
 * SPDX-FileCopyrightText: 2021 Rafał M. Siejakowski
 *
 * SPDX-License-Identifier: BSD-3-Clause
 */

//! Capabilities of raw value types and the summation strategies they select.
//!
//! A raw value type `V` can be accumulated by a
//! [`Compensated`](crate::Compensated) if it is [`Kahanizable`]: it is
//! [`Copy`], it has an additive identity ([`num_traits::Zero`]), and it has
//! binary `+` and `-` returning `V`. Each such type names, through
//! [`Kahanizable::Strategy`], one of three summation strategies:
//!
//! - [`Real`]: the Kahan–Neumaier algorithm, which requires an ordering and an
//!   absolute value ([`Abs`]);
//! - [`Complex`]: the Kahan–Neumaier algorithm applied independently to the
//!   real and imaginary parts, which requires [`ComplexParts`];
//! - [`Generic`]: the plain Kahan algorithm, which requires nothing more than
//!   the baseline.
//!
//! The strategy is resolved at compile time. Naming a strategy whose
//! capabilities the type lacks is a compile error, and so is using a type
//! which is not [`Kahanizable`] at all:
//!
//! ```compile_fail
//! use compensated::Compensated;
//! // `String` has no additive identity and no binary minus.
//! let _ = Compensated::<String>::new();
//! ```
//!
//! ```compile_fail
//! use compensated::capability::{Kahanizable, Real};
//! use std::ops::{Add, Sub};
//!
//! #[derive(Clone, Copy, PartialEq, PartialOrd)]
//! struct NoAbs(f64);
//!
//! impl Add for NoAbs {
//!     type Output = Self;
//!     fn add(self, other: Self) -> Self { NoAbs(self.0 + other.0) }
//! }
//! impl Sub for NoAbs {
//!     type Output = Self;
//!     fn sub(self, other: Self) -> Self { NoAbs(self.0 - other.0) }
//! }
//! impl num_traits::Zero for NoAbs {
//!     fn zero() -> Self { NoAbs(0.0) }
//!     fn is_zero(&self) -> bool { self.0 == 0.0 }
//! }
//! // `Real` needs an absolute value.
//! impl Kahanizable for NoAbs {
//!     type Strategy = Real;
//! }
//! ```
//!
//! The crate provides implementations for [`f32`], [`f64`] and
//! [`num_complex::Complex`]. User types implement the traits themselves:
//!
//! ```
//! use compensated::prelude::*;
//! use compensated::capability::Generic;
//! use std::ops::{Add, Sub};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Pair(f64, f64);
//!
//! impl Add for Pair {
//!     type Output = Self;
//!     fn add(self, other: Self) -> Self { Pair(self.0 + other.0, self.1 + other.1) }
//! }
//! impl Sub for Pair {
//!     type Output = Self;
//!     fn sub(self, other: Self) -> Self { Pair(self.0 - other.0, self.1 - other.1) }
//! }
//! impl num_traits::Zero for Pair {
//!     fn zero() -> Self { Pair(0.0, 0.0) }
//!     fn is_zero(&self) -> bool { self.0 == 0.0 && self.1 == 0.0 }
//! }
//! impl Kahanizable for Pair {
//!     type Strategy = Generic;
//! }
//!
//! let mut acc = Compensated::from(Pair(1E20, 1E20));
//! acc += Pair(1.0, 1.0);
//! acc -= Pair(1E20, 1E20);
//! acc -= Pair(1.0, 1.0);
//! assert_eq!(acc.value(), Pair(0.0, 0.0));
//! ```

mod impls;
mod strategy;

pub use strategy::{Complex, Generic, Real, Strategy, Summation};

use num_traits::Zero;
use std::ops::{Add, Sub};

/// A raw value type that can be summed with compensation.
///
/// Implementors choose the algorithm through [`Strategy`](Kahanizable::Strategy);
/// the bounds of the corresponding [`Summation`] implementation are checked
/// when the implementation is written.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as the raw value of a compensated sum",
    label = "not `Kahanizable`",
    note = "a raw value type must be `Copy`, implement `num_traits::Zero`, and have binary `+` and `-` returning `{Self}`"
)]
pub trait Kahanizable: Copy + Zero + Add<Output = Self> + Sub<Output = Self> {
    /// The summation strategy: one of [`Real`], [`Complex`] or [`Generic`].
    type Strategy: Summation<Self>;

    /// Returns the additive inverse of `self`.
    ///
    /// The default computes `zero - self`; types with a native unary minus
    /// should override it.
    #[inline(always)]
    fn negate(self) -> Self {
        Self::zero() - self
    }
}

/// An absolute value whose results can be compared.
///
/// For primitive floats this is the inherent `abs`; user types implement
/// it with whatever magnitude they define.
pub trait Abs {
    type Output: PartialOrd;

    /// Returns the absolute value of `self`.
    fn abs(&self) -> Self::Output;
}

/// A type that behaves like a complex number.
///
/// Its real and imaginary parts must themselves be usable by the [`Real`]
/// strategy, and the value must be reconstructible from them.
pub trait ComplexParts: Sized {
    /// The type of the real and imaginary parts.
    type Part: Copy + Zero + Sub<Output = Self::Part> + PartialOrd + Abs;

    /// Returns the real part.
    fn re(&self) -> Self::Part;

    /// Returns the imaginary part.
    fn im(&self) -> Self::Part;

    /// Builds a value from its real and imaginary parts.
    fn from_parts(re: Self::Part, im: Self::Part) -> Self;
}
