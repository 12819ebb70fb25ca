use compensated::prelude::*;
use compensated::utils::lossy_pair;
use num_complex::Complex64;
use rand::{rngs::StdRng, Rng, SeedableRng};

const TRIALS: usize = if cfg!(feature = "slow_tests") {
    1_000_000
} else {
    10_000
};

fn samples() -> [f64; 7] {
    let (huge, tiny) = lossy_pair::<f64>();
    [0.0, 1.0, 42.0, huge, -huge, tiny, -tiny]
}

/// Returns a random value whose magnitude spans many binary orders.
fn random_f64(rng: &mut StdRng) -> f64 {
    rng.random_range(-1.0_f64..1.0) * 2_f64.powi(rng.random_range(-40..40))
}

fn random_f32(rng: &mut StdRng) -> f32 {
    rng.random_range(-1.0_f32..1.0) * 2_f32.powi(rng.random_range(-20..20))
}

#[test]
fn test_reflexive_and_symmetric() {
    let (_, tiny) = lossy_pair::<f64>();
    let accs: Vec<Compensated<f64>> = samples()
        .into_iter()
        .flat_map(|x| [Compensated::from(x), Compensated::from(x).plus(tiny)])
        .collect();

    for a in &accs {
        assert_eq!(a, a, "{a:?}");
        for b in &accs {
            assert_eq!(a == b, b == a, "{a:?} {b:?}");
        }
        for raw in samples() {
            assert_eq!(*a == raw, raw == *a, "{a:?} {raw}");
        }
    }
}

#[test]
fn test_split_independence() {
    let (huge, tiny) = lossy_pair::<f64>();
    // The same value with a different split between sum and compensation.
    let a = Compensated::from(huge).plus(tiny);
    let b = Compensated::from(tiny).plus(huge);
    assert_eq!(a.sum(), huge);
    assert_eq!(a.compensation(), tiny);
    assert_eq!(b.sum(), huge);
    assert_eq!(a, b);
    assert_ne!(a, Compensated::from(huge));
}

#[test]
fn test_raw_equality_forms_diverge() {
    let (huge, tiny) = lossy_pair::<f64>();
    let acc = Compensated::from(huge).plus(tiny);
    // compensation == value - sum fails...
    assert_ne!(acc.compensation(), huge - acc.sum());
    // ...but sum == value - compensation holds.
    assert_eq!(acc.sum(), huge - acc.compensation());
    assert!(acc == huge);
    assert!(huge == acc);
    assert!(acc.eq_value(huge));
    assert!(eq_left(huge, &acc));
}

#[test]
fn test_round_trip_samples() {
    let (huge, tiny) = lossy_pair::<f64>();
    let two_term = Compensated::from(huge).plus(tiny);
    for x in samples() {
        for start in samples() {
            let acc = Compensated::from(start);
            assert_eq!((acc + x) - x, acc, "{start} {x}");
            assert_eq!(sub_left(x, sub_left(x, acc)), acc, "{start} {x}");
        }
        assert_eq!((two_term + x) - x, two_term, "{x}");
    }
}

#[test]
fn test_round_trip_random_f64() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..TRIALS {
        let acc = Compensated::from(random_f64(&mut rng));
        let x = random_f64(&mut rng);
        assert_eq!((acc + x) - x, acc, "{acc:?} {x}");
        assert_eq!(acc + x, x + acc, "{acc:?} {x}");
    }
}

#[test]
fn test_round_trip_random_f32() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..TRIALS {
        let acc = Compensated::from(random_f32(&mut rng));
        let x = random_f32(&mut rng);
        assert_eq!((acc + x) - x, acc, "{acc:?} {x}");
    }
}

#[test]
fn test_round_trip_random_complex() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..TRIALS {
        let acc = Compensated::from(Complex64::new(
            random_f64(&mut rng),
            random_f64(&mut rng),
        ));
        let z = Complex64::new(random_f64(&mut rng), random_f64(&mut rng));
        assert_eq!((acc + z) - z, acc, "{acc:?} {z}");
    }
}

/// Builds an accumulator from a random start and three random increments, so
/// that its compensation is in general nonzero.
fn random_two_term_f64(rng: &mut StdRng) -> Compensated<f64> {
    let mut acc = Compensated::from(random_f64(rng));
    for _ in 0..3 {
        acc += random_f64(rng);
    }
    acc
}

fn random_two_term_f32(rng: &mut StdRng) -> Compensated<f32> {
    let mut acc = Compensated::from(random_f32(rng));
    for _ in 0..3 {
        acc += random_f32(rng);
    }
    acc
}

#[test]
fn test_round_trip_two_term_f64() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut inexact = 0;
    for _ in 0..TRIALS {
        let acc = random_two_term_f64(&mut rng);
        let x = random_f64(&mut rng);
        let back = (acc + x) - x;
        if back != acc {
            inexact += 1;
        }
        // The rounding of the compensation update is bounded by a few ulps
        // of the largest operand.
        let scale = acc.sum().abs().max(x.abs()).max(acc.value().abs());
        let distance = (back.value() - acc.value()).abs();
        assert!(distance <= 4.0 * f64::EPSILON * scale, "{acc:?} {x} {back:?}");
    }
    // With a nonzero compensation the exact round trip fails for a few
    // percent of the inputs.
    assert!(inexact > 0);
    assert!(inexact < TRIALS / 5, "{inexact}");
}

#[test]
fn test_round_trip_two_term_f32() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut inexact = 0;
    for _ in 0..TRIALS {
        let acc = random_two_term_f32(&mut rng);
        let x = random_f32(&mut rng);
        let back = (acc + x) - x;
        if back != acc {
            inexact += 1;
        }
        let scale = acc.sum().abs().max(x.abs()).max(acc.value().abs());
        let distance = (back.value() - acc.value()).abs();
        assert!(distance <= 4.0 * f32::EPSILON * scale, "{acc:?} {x} {back:?}");
    }
    assert!(inexact > 0);
    assert!(inexact < TRIALS / 5, "{inexact}");
}
