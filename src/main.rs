/*
 * SPDX-FileCopyrightText: 2021 Rafał M. Siejakowski
 *
 * SPDX-License-Identifier: BSD-3-Clause
 */

use anyhow::{bail, Context, Result};
use compensated::capability::Generic;
use compensated::prelude::*;
use compensated::utils::{lossy_pair, read_values};
use dsi_progress_logger::prelude::*;
use num_complex::Complex64;
use std::ops::{Add, Sub};

/// A three-dimensional point with nothing more than `+` and `-`, summed with
/// the plain Kahan algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    fn splat(v: f64) -> Self {
        Point { x: v, y: v, z: v }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl num_traits::Zero for Point {
    fn zero() -> Self {
        Point::splat(0.0)
    }

    fn is_zero(&self) -> bool {
        *self == Point::zero()
    }
}

impl Kahanizable for Point {
    type Strategy = Generic;
}

fn demo(pl: &mut impl ProgressLog) {
    let huge = 1E30;
    let tiny = 1E-30;

    pl.info(format_args!(
        "Naive f64 arithmetic: {huge:e} + {tiny:e} - {huge:e} - {tiny:e} = {:e}",
        huge + tiny - huge - tiny
    ));

    let mut acc = Compensated::from(huge);
    acc += tiny;
    acc -= huge;
    acc -= tiny;
    pl.info(format_args!(
        "Compensated<f64> ({}): {acc}",
        Compensated::<f64>::algorithm()
    ));

    let (huge_f32, tiny_f32) = lossy_pair::<f32>();
    let acc = Compensated::from(huge_f32) + tiny_f32 - huge_f32 - tiny_f32;
    pl.info(format_args!(
        "Naive f32 arithmetic: {:e}, Compensated<f32>: {acc}",
        huge_f32 + tiny_f32 - huge_f32 - tiny_f32
    ));

    let z = Complex64::new(huge, tiny);
    let w = Complex64::new(tiny, huge);
    let mut acc = Compensated::from(z);
    acc += w;
    acc -= z;
    acc -= w;
    pl.info(format_args!(
        "Compensated<Complex<f64>> ({}): real part {}, imaginary part {}",
        Compensated::<Complex64>::algorithm(),
        acc.re(),
        acc.im()
    ));

    let acc_z = Compensated::from(z);
    let acc_w = Compensated::from(w);
    let result = acc_z + acc_w - acc_z - acc_w;
    pl.info(format_args!(
        "Operators between accumulators: {result} (equal to zero: {})",
        result == Complex64::new(0.0, 0.0)
    ));

    let result = z + acc_w - acc_z - w;
    pl.info(format_args!(
        "Raw values on the left: {result} (equal to zero: {})",
        result == Complex64::new(0.0, 0.0)
    ));

    let huge_point = Compensated::from(Point::splat(huge));
    let tiny_point = Compensated::from(Point::splat(tiny));
    let point = (huge_point + tiny_point - huge_point - tiny_point).value();
    pl.info(format_args!(
        "Compensated<Point> ({}): ({}, {}, {})",
        Compensated::<Point>::algorithm(),
        point.x,
        point.y,
        point.z
    ));
}

fn sum_file(path: &str, pl: &mut impl ProgressLog) -> Result<()> {
    let values = read_values::<f64>(path)?;
    pl.info(format_args!("Read {} values from {path}", values.len()));

    let naive: f64 = values.iter().sum();
    let acc = compensated_sum(values.iter().copied(), pl);

    pl.info(format_args!("Naive sum:       {naive:e}"));
    pl.info(format_args!("Compensated sum: {:e}", acc.value()));
    pl.info(format_args!("Error estimate:  {:e}", acc.error()));
    Ok(())
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    let mut main_pl = progress_logger![display_memory = true];

    match std::env::args()
        .nth(1)
        .context("No operation provided (expected \"demo\" or \"sum\")")?
        .as_str()
    {
        "demo" => demo(&mut main_pl),
        "sum" => {
            let path = std::env::args().nth(2).context("No value file provided")?;
            sum_file(&path, &mut main_pl)?;
        }
        operation => bail!("Unknown operation {operation:?}"),
    }

    Ok(())
}
