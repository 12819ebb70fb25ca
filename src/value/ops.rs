use super::Compensated;
use crate::capability::Kahanizable;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl<V: Kahanizable> Default for Compensated<V> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Kahanizable> From<V> for Compensated<V> {
    #[inline(always)]
    fn from(value: V) -> Self {
        Self {
            sum: value,
            compensation: V::zero(),
        }
    }
}

impl<V: Kahanizable + fmt::Display> fmt::Display for Compensated<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

/// Two accumulators are equal if `sum₁ - sum₂ == compensation₂ - compensation₁`.
///
/// Accumulators representing the same value with a different split between
/// sum and compensation compare equal, and neither side is converted to a
/// single value of type `V` first.
impl<V: Kahanizable + PartialEq> PartialEq for Compensated<V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.sum - other.sum == other.compensation - self.compensation
    }
}

/// See [`Compensated::eq_value`].
impl<V: Kahanizable + PartialEq> PartialEq<V> for Compensated<V> {
    #[inline]
    fn eq(&self, other: &V) -> bool {
        self.eq_value(*other)
    }
}

impl<V: Kahanizable> Neg for Compensated<V> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl<V: Kahanizable> Add<V> for Compensated<V> {
    type Output = Self;

    #[inline]
    fn add(self, increment: V) -> Self {
        self.plus(increment)
    }
}

impl<V: Kahanizable> Sub<V> for Compensated<V> {
    type Output = Self;

    #[inline]
    fn sub(self, decrement: V) -> Self {
        self.minus(decrement)
    }
}

impl<V: Kahanizable> Add for Compensated<V> {
    type Output = Self;

    #[inline]
    fn add(mut self, other: Self) -> Self {
        self.add_compensated(&other);
        self
    }
}

impl<V: Kahanizable> Sub for Compensated<V> {
    type Output = Self;

    #[inline]
    fn sub(mut self, other: Self) -> Self {
        self.sub_compensated(&other);
        self
    }
}

impl<V: Kahanizable> AddAssign<V> for Compensated<V> {
    #[inline]
    fn add_assign(&mut self, increment: V) {
        self.add_value(increment);
    }
}

impl<V: Kahanizable> SubAssign<V> for Compensated<V> {
    #[inline]
    fn sub_assign(&mut self, decrement: V) {
        self.sub_value(decrement);
    }
}

impl<V: Kahanizable> AddAssign for Compensated<V> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.add_compensated(&other);
    }
}

impl<V: Kahanizable> SubAssign for Compensated<V> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.sub_compensated(&other);
    }
}

impl<V: Kahanizable> Extend<V> for Compensated<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.accumulate(iter);
    }
}

impl<V: Kahanizable> FromIterator<V> for Compensated<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.accumulate(iter);
        acc
    }
}

impl<V: Kahanizable> Sum<V> for Compensated<V> {
    fn sum<I: Iterator<Item = V>>(iter: I) -> Self {
        iter.collect()
    }
}

/// Merges the accumulators left to right.
impl<V: Kahanizable> Sum for Compensated<V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut acc, other| {
            acc.add_compensated(&other);
            acc
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::lossy_pair;

    #[test]
    fn test_operators() {
        let (huge, tiny) = lossy_pair::<f64>();
        let a = Compensated::from(huge);
        let b = Compensated::from(tiny);
        let c = a + b - a - b;
        assert_eq!(c.value(), 0.0);
        let d = (a + tiny) - huge - tiny;
        assert_eq!(d.value(), 0.0);
        let mut e = a;
        e += b;
        e -= a;
        e -= b;
        assert_eq!(e.value(), 0.0);
    }

    #[test]
    fn test_neg() {
        let acc = Compensated::from(2.0_f32).plus(0.5);
        assert_eq!((-acc).value(), -2.5);
        assert_eq!((acc + -acc).value(), 0.0);
    }

    #[test]
    fn test_eq() {
        let (huge, tiny) = lossy_pair::<f64>();
        let a = Compensated::from(huge).plus(tiny);
        let b = Compensated::from(huge);
        assert_eq!(a, a);
        assert_ne!(a, b);
        assert_ne!(b, a);
        // Same value, different split.
        let c = Compensated::from(1.0_f64).plus(2.0);
        let d = Compensated::from(3.0_f64);
        assert_eq!(c, d);
        assert!(c == 3.0_f64);
        assert!(c != 4.0_f64);
    }

    #[test]
    fn test_iterators() {
        let values = [1.0_f64, 2.0, 3.0, 4.0];
        let collected: Compensated<f64> = values.iter().copied().collect();
        let summed: Compensated<f64> = values.iter().copied().sum();
        let mut extended = Compensated::from(0.0_f64);
        extended.extend(values);
        assert_eq!(collected.value(), 10.0);
        assert_eq!(summed.value(), 10.0);
        assert_eq!(extended.value(), 10.0);
    }

    #[test]
    fn test_sum_of_accumulators() {
        let (huge, tiny) = lossy_pair::<f64>();
        let parts = [
            Compensated::from(huge).plus(tiny),
            Compensated::from(-huge).plus(tiny),
        ];
        let total: Compensated<f64> = parts.into_iter().sum();
        assert_eq!(total.value(), 2.0 * tiny);
    }

    #[test]
    fn test_display() {
        let acc = Compensated::from(1.5_f64).plus(1.0);
        assert_eq!(acc.to_string(), "2.5");
        assert_eq!(format!("{:.2}", acc), "2.50");
    }
}
