//! Operations with the raw value on the left-hand side.
//!
//! The orphan rule forbids implementing `Add<Compensated<V>>` for every raw
//! type `V` at once, so the generic forms are free functions, and the
//! [`symmetric_ops!`](crate::symmetric_ops) macro turns them into operators
//! for concrete types. The macro is already applied to [`f32`], [`f64`],
//! `Complex<f32>` and `Complex<f64>`.

use super::Compensated;
use crate::capability::Kahanizable;

/// Returns `raw + acc`, computed as `acc + raw`.
#[inline]
pub fn add_left<V: Kahanizable>(raw: V, acc: Compensated<V>) -> Compensated<V> {
    acc.plus(raw)
}

/// Returns `raw - acc`, computed as `(-acc) + raw`.
#[inline]
pub fn sub_left<V: Kahanizable>(raw: V, acc: Compensated<V>) -> Compensated<V> {
    acc.negated().plus(raw)
}

/// Returns whether `raw == acc`, computed as `acc == raw`.
#[inline]
pub fn eq_left<V: Kahanizable + PartialEq>(raw: V, acc: &Compensated<V>) -> bool {
    acc.eq_value(raw)
}

/// Implements `+`, `-` and `==` with a raw value on the left and a
/// [`Compensated`] on the right for the given raw value types.
///
/// # Examples
/// ```
/// use compensated::prelude::*;
/// use compensated::capability::Real;
/// use std::ops::{Add, Sub};
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Meters(f64);
///
/// impl Add for Meters {
///     type Output = Self;
///     fn add(self, other: Self) -> Self { Meters(self.0 + other.0) }
/// }
/// impl Sub for Meters {
///     type Output = Self;
///     fn sub(self, other: Self) -> Self { Meters(self.0 - other.0) }
/// }
/// impl num_traits::Zero for Meters {
///     fn zero() -> Self { Meters(0.0) }
///     fn is_zero(&self) -> bool { self.0 == 0.0 }
/// }
/// impl Abs for Meters {
///     type Output = f64;
///     fn abs(&self) -> f64 { self.0.abs() }
/// }
/// impl Kahanizable for Meters {
///     type Strategy = Real;
/// }
///
/// compensated::symmetric_ops!(Meters);
///
/// let acc = Meters(1.0) + Compensated::from(Meters(2.0));
/// assert!(Meters(3.0) == acc);
/// assert!(Meters(0.0) == Meters(3.0) - acc);
/// ```
#[macro_export]
macro_rules! symmetric_ops {
    ($($ty:ty),* $(,)?) => {$(
        impl ::core::ops::Add<$crate::Compensated<$ty>> for $ty {
            type Output = $crate::Compensated<$ty>;

            #[inline]
            fn add(self, acc: $crate::Compensated<$ty>) -> Self::Output {
                $crate::value::add_left(self, acc)
            }
        }

        impl ::core::ops::Sub<$crate::Compensated<$ty>> for $ty {
            type Output = $crate::Compensated<$ty>;

            #[inline]
            fn sub(self, acc: $crate::Compensated<$ty>) -> Self::Output {
                $crate::value::sub_left(self, acc)
            }
        }

        impl ::core::cmp::PartialEq<$crate::Compensated<$ty>> for $ty {
            #[inline]
            fn eq(&self, acc: &$crate::Compensated<$ty>) -> bool {
                $crate::value::eq_left(*self, acc)
            }
        }
    )*};
}

symmetric_ops!(
    f32,
    f64,
    num_complex::Complex<f32>,
    num_complex::Complex<f64>
);
