use num_traits::Float;

/// Returns a pair `(huge, tiny)` of powers of two for which naive floating-point
/// addition is lossy, that is, `huge + tiny - huge - tiny != 0`.
///
/// The exponents are plus and minus half the bit size of `F`: `2³²` and `2⁻³²`
/// for [`f64`], `2¹⁶` and `2⁻¹⁶` for [`f32`]. Their ratio exceeds the
/// precision of `F`, so `huge + tiny == huge`.
///
/// # Examples
/// ```
/// # use compensated::utils::lossy_pair;
/// let (huge, tiny) = lossy_pair::<f64>();
/// assert_eq!(huge + tiny, huge);
/// assert_ne!(huge + tiny - huge - tiny, 0.0);
/// ```
pub fn lossy_pair<F: Float>() -> (F, F) {
    let half_bit_size = 4 * std::mem::size_of::<F>();
    let two = F::one() + F::one();
    let mut huge = F::one();
    let mut tiny = F::one();
    for _ in 0..half_bit_size {
        huge = huge * two;
        tiny = tiny / two;
    }
    (huge, tiny)
}
