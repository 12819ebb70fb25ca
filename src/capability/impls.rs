use super::*;
use num_traits::Num;
use std::ops::Neg;

macro_rules! impl_real {
    ($($ty:ty),*) => {$(
        impl Abs for $ty {
            type Output = $ty;

            #[inline(always)]
            fn abs(&self) -> $ty {
                <$ty>::abs(*self)
            }
        }

        impl Kahanizable for $ty {
            type Strategy = Real;

            #[inline(always)]
            fn negate(self) -> Self {
                -self
            }
        }
    )*};
}

impl_real!(f32, f64);

impl<T> ComplexParts for num_complex::Complex<T>
where
    T: Copy + Num + PartialOrd + Abs,
{
    type Part = T;

    #[inline(always)]
    fn re(&self) -> T {
        self.re
    }

    #[inline(always)]
    fn im(&self) -> T {
        self.im
    }

    #[inline(always)]
    fn from_parts(re: T, im: T) -> Self {
        Self::new(re, im)
    }
}

impl<T> Kahanizable for num_complex::Complex<T>
where
    T: Copy + Num + PartialOrd + Abs + Neg<Output = T>,
{
    type Strategy = Complex;

    #[inline(always)]
    fn negate(self) -> Self {
        -self
    }
}
