/*
 * SPDX-FileCopyrightText: 2021 Rafał M. Siejakowski
 *
 * SPDX-License-Identifier: BSD-3-Clause
 */

//! Kahan and Kahan–Neumaier compensated summation for generic value types.
//!
//! The main type is [`Compensated`], an accumulator that keeps a running
//! compensation next to the running sum of values of a raw type `V`. The
//! algorithm is chosen at compile time from the capabilities of `V` (see
//! [`capability`]): Kahan–Neumaier for real numbers, component-wise
//! Kahan–Neumaier for complex numbers, plain Kahan for any other type with
//! `+` and `-`.
//!
//! ```
//! use compensated::prelude::*;
//! use num_complex::Complex64;
//!
//! let huge = 1E30;
//! let tiny = 1E-30;
//! let z = Complex64::new(huge, tiny);
//! let w = Complex64::new(tiny, huge);
//!
//! let mut acc = Compensated::from(z);
//! acc += w;
//! acc -= z;
//! acc -= w;
//! assert_eq!(acc.re(), 0.0);
//! assert_eq!(acc.im(), 0.0);
//! ```

pub mod capability;
pub mod sum;
pub mod utils;
pub mod value;

pub use value::Compensated;

/// Module exposing all traits in a single level.
pub mod traits {
    pub use crate::capability::{Abs, ComplexParts, Kahanizable, Strategy, Summation};
}

/// Use `use compensated::prelude::*;` to import the accumulator, the
/// left-hand operations and all traits.
pub mod prelude {
    pub use crate::sum::compensated_sum;
    pub use crate::symmetric_ops;
    pub use crate::traits::*;
    pub use crate::value::{add_left, eq_left, sub_left};
    pub use crate::Compensated;
}
