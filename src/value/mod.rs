/*
 * SPDX-FileCopyrightText: 2021 Rafał M. Siejakowski
 *
 * SPDX-License-Identifier: BSD-3-Clause
 */

//! The compensated accumulator and its operators.

mod ops;
mod symmetric;

pub use symmetric::{add_left, eq_left, sub_left};

use crate::capability::{ComplexParts, Kahanizable, Strategy, Summation};

/// A value of type `V` with compensated addition.
///
/// The accumulator keeps the naive running sum together with a running
/// compensation, so that `sum + compensation` is the best available estimate
/// of the true total. Additions use the algorithm selected by
/// [`Kahanizable::Strategy`]: Kahan–Neumaier for real types, component-wise
/// Kahan–Neumaier for complex types, plain Kahan for everything else.
///
/// The pair can only be changed through the accumulator's own operations.
/// It is a plain [`Copy`] value exactly twice the size of `V`.
///
/// # Examples
/// ```
/// # use compensated::Compensated;
/// let huge = 1E30_f64;
/// let tiny = 1E-30_f64;
/// assert_ne!(huge + tiny - huge - tiny, 0.0);
///
/// let mut acc = Compensated::from(huge);
/// acc += tiny;
/// acc -= huge;
/// acc -= tiny;
/// assert_eq!(acc.value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Compensated<V: Kahanizable> {
    /// The running sum.
    sum: V,
    /// The running compensation.
    compensation: V,
}

impl<V: Kahanizable> Compensated<V> {
    /// Creates a new accumulator with value zero.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            sum: V::zero(),
            compensation: V::zero(),
        }
    }

    /// Replaces the content of the accumulator with `value`, discarding the
    /// compensation.
    #[inline(always)]
    pub fn set(&mut self, value: V) {
        self.sum = value;
        self.compensation = V::zero();
    }

    /// Returns the naive running sum.
    #[inline(always)]
    pub fn sum(&self) -> V {
        self.sum
    }

    /// Returns the running compensation.
    #[inline(always)]
    pub fn compensation(&self) -> V {
        self.compensation
    }

    /// Returns the best available estimate of the accumulated value, that is,
    /// `sum + compensation`.
    ///
    /// The addition is performed at each call.
    #[inline(always)]
    pub fn value(&self) -> V {
        self.sum + self.compensation
    }

    /// Returns an estimate of the error made by [`value`](Self::value), that
    /// is, the part of the two-term representation that the conversion to a
    /// single value of type `V` discards.
    pub fn error(&self) -> V {
        let converted = self.value();
        (self.sum - converted) + self.compensation
    }

    /// Returns the name of the summation algorithm used for `V`.
    pub fn algorithm() -> &'static str {
        <V::Strategy as Strategy>::ALGORITHM
    }

    /// Adds `increment` in place.
    #[inline]
    pub fn add_value(&mut self, increment: V) {
        let naive_sum = self.sum + increment;
        let correction = <V::Strategy as Summation<V>>::correction(self.sum, increment, naive_sum);
        self.compensation = self.compensation + correction;
        self.sum = naive_sum;
    }

    /// Subtracts `decrement` in place, by adding its negation.
    #[inline]
    pub fn sub_value(&mut self, decrement: V) {
        self.add_value(decrement.negate());
    }

    /// Adds another accumulator in place.
    ///
    /// The sum of `other` and then its compensation are added as ordinary
    /// increments.
    #[inline]
    pub fn add_compensated(&mut self, other: &Self) {
        self.add_value(other.sum);
        self.add_value(other.compensation);
    }

    /// Subtracts another accumulator in place, by adding its negation.
    #[inline]
    pub fn sub_compensated(&mut self, other: &Self) {
        self.add_compensated(&other.negated());
    }

    /// Returns a new accumulator containing `self + increment`.
    #[must_use]
    #[inline]
    pub fn plus(mut self, increment: V) -> Self {
        self.add_value(increment);
        self
    }

    /// Returns a new accumulator containing `self - decrement`.
    #[must_use]
    #[inline]
    pub fn minus(mut self, decrement: V) -> Self {
        self.sub_value(decrement);
        self
    }

    /// Returns the additive inverse of this accumulator.
    ///
    /// Both terms are negated with [`Kahanizable::negate`], so no rounding
    /// takes place for types with an exact negation.
    #[must_use]
    #[inline]
    pub fn negated(&self) -> Self {
        Self {
            sum: self.sum.negate(),
            compensation: self.compensation.negate(),
        }
    }

    /// Adds all values returned by `values`, in order.
    ///
    /// # Examples
    /// ```
    /// # use compensated::Compensated;
    /// let mut acc = Compensated::new();
    /// acc.accumulate([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(acc.value(), 10.0);
    /// ```
    pub fn accumulate(&mut self, values: impl IntoIterator<Item = V>) {
        for value in values {
            self.add_value(value);
        }
    }

    /// Returns whether this accumulator represents `value`.
    ///
    /// The comparison does not convert the accumulator: it succeeds if
    /// `compensation == value - sum` or if `sum == value - compensation`.
    pub fn eq_value(&self, value: V) -> bool
    where
        V: PartialEq,
    {
        self.compensation == value - self.sum || self.sum == value - self.compensation
    }
}

impl<V: Kahanizable + ComplexParts> Compensated<V> {
    /// Returns the real part of the accumulated value.
    #[inline]
    pub fn re(&self) -> V::Part {
        self.sum.re() + self.compensation.re()
    }

    /// Returns the imaginary part of the accumulated value.
    #[inline]
    pub fn im(&self) -> V::Part {
        self.sum.im() + self.compensation.im()
    }
}
