// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Scalar numeric helpers: unnormalized sinc, tolerance-based scrubbing of
//! near-zero parts, and Cauchy principal-value integration.

use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Below this |x| the sinc Taylor series is used instead of sin(x)/x.
const SINC_SERIES_THRESHOLD: f64 = 1e-4;

/// Unnormalized sinc, sin(x)/x with sinc(0) = 1.
pub fn sinc(x: f64) -> f64 {
    if x.abs() < SINC_SERIES_THRESHOLD {
        let x2 = x * x;
        1.0 - x2 / 6.0 + x2 * x2 / 120.0
    } else {
        x.sin() / x
    }
}

/// Zero a real number whose magnitude is below `tol`.
pub fn chop_real(x: f64, tol: f64) -> f64 {
    if x.abs() < tol {
        0.0
    } else {
        x
    }
}

/// Zero the real and imaginary parts of `z` independently when below `tol`.
pub fn chop(z: Complex64, tol: f64) -> Complex64 {
    Complex64::new(chop_real(z.re, tol), chop_real(z.im, tol))
}

/// [`chop`] applied elementwise.
pub fn chop_matrix(a: &Array2<Complex64>, tol: f64) -> Array2<Complex64> {
    a.mapv(|z| chop(z, tol))
}

/// Real part of `a` if every imaginary part is below `tol`, else `None`.
pub fn real_if_close(a: &Array2<Complex64>, tol: f64) -> Option<Array2<f64>> {
    if a.iter().all(|z| z.im.abs() < tol) {
        Some(a.mapv(|z| z.re))
    } else {
        None
    }
}

/// Tolerances and work limits for adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadratureOptions {
    /// Absolute error target
    #[serde(default = "default_abs_tol")]
    pub abs_tol: f64,

    /// Relative error target
    #[serde(default = "default_rel_tol")]
    pub rel_tol: f64,

    /// Maximum bisection depth of any one subinterval
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Maximum number of subintervals; bounds the total number of integrand
    /// evaluations at 15 per subinterval
    #[serde(default = "default_max_intervals")]
    pub max_intervals: usize,
}

impl Default for QuadratureOptions {
    fn default() -> Self {
        Self {
            abs_tol: default_abs_tol(),
            rel_tol: default_rel_tol(),
            max_depth: default_max_depth(),
            max_intervals: default_max_intervals(),
        }
    }
}

fn default_abs_tol() -> f64 {
    1e-12
}

fn default_rel_tol() -> f64 {
    1e-10
}

fn default_max_depth() -> u32 {
    40
}

fn default_max_intervals() -> usize {
    2000
}

/// 5-point Gauss–Legendre nodes and weights on [-1, 1].
const GL5_NODES: [f64; 5] = [
    -0.906_179_845_938_664,
    -0.538_469_310_105_683_1,
    0.0,
    0.538_469_310_105_683_1,
    0.906_179_845_938_664,
];
const GL5_WEIGHTS: [f64; 5] = [
    0.236_926_885_056_189_1,
    0.478_628_670_499_366_5,
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
];

fn gauss_legendre_5<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    half * GL5_NODES
        .iter()
        .zip(&GL5_WEIGHTS)
        .map(|(&x, &w)| w * f(mid + half * x))
        .sum::<f64>()
}

/// One subinterval: the two-panel estimate and its difference from the
/// one-panel estimate.
#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
    depth: u32,
}

impl Segment {
    fn new<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, depth: u32) -> Result<Self> {
        let mid = 0.5 * (a + b);
        let whole = gauss_legendre_5(f, a, b);
        let value = gauss_legendre_5(f, a, mid) + gauss_legendre_5(f, mid, b);
        if !(whole.is_finite() && value.is_finite()) {
            return Err(Error::invalid(
                "integrate",
                format!("integrand is not finite on [{a}, {b}]"),
            ));
        }
        Ok(Self {
            a,
            b,
            value,
            error: (value - whole).abs(),
            depth,
        })
    }
}

/// ∫_a^b f(x) dx by globally adaptive 5-point Gauss–Legendre bisection.
///
/// The subinterval with the largest error estimate is split first, until
/// the summed estimate meets `abs_tol` or `rel_tol`, or `max_intervals` is
/// reached. Subintervals at `max_depth` are no longer split. Either limit
/// returns the current estimate with a warning.
///
/// The integrand is never evaluated at the endpoints, so integrable endpoint
/// singularities of removable type are tolerated.
///
/// # Errors
/// `InvalidArgument` if the integrand yields a non-finite value.
pub fn integrate<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    opts: &QuadratureOptions,
) -> Result<f64> {
    if a == b {
        return Ok(0.0);
    }
    let mut segments = vec![Segment::new(&f, a, b, 0)?];

    loop {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let error: f64 = segments.iter().map(|s| s.error).sum();
        if error <= opts.abs_tol.max(opts.rel_tol * value.abs()) {
            return Ok(value);
        }
        if segments.len() >= opts.max_intervals {
            warn!(
                a,
                b,
                error,
                max_intervals = opts.max_intervals,
                "quadrature hit interval limit"
            );
            return Ok(value);
        }

        let Some(worst) = segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.depth < opts.max_depth)
            .max_by(|(_, x), (_, y)| x.error.total_cmp(&y.error))
            .map(|(i, _)| i)
        else {
            warn!(
                a,
                b,
                error,
                max_depth = opts.max_depth,
                "quadrature hit maximum depth"
            );
            return Ok(value);
        };

        let seg = segments.swap_remove(worst);
        let mid = 0.5 * (seg.a + seg.b);
        segments.push(Segment::new(&f, seg.a, mid, seg.depth + 1)?);
        segments.push(Segment::new(&f, mid, seg.b, seg.depth + 1)?);
    }
}

/// Cauchy principal value PV ∫_a^b f(x)/x dx for a < 0 < b.
///
/// The symmetric part around the pole is folded into the regular integrand
/// (f(x) − f(−x))/x on [0, c] with c = min(−a, b); the remaining one-sided
/// interval is integrated directly.
///
/// # Errors
/// `InvalidArgument` unless `a < 0 < b` and both are finite, or if `f`
/// yields a non-finite value on the domain.
pub fn cauchy_principal_value<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    opts: &QuadratureOptions,
) -> Result<f64> {
    if !(a.is_finite() && b.is_finite() && a < 0.0 && b > 0.0) {
        return Err(Error::invalid(
            "cauchy_principal_value",
            format!("domain [{a}, {b}] must straddle 0"),
        ));
    }
    let c = (-a).min(b);
    let symmetric = integrate(|x| (f(x) - f(-x)) / x, 0.0, c, opts)?;
    let tail = if b > c {
        integrate(|x| f(x) / x, c, b, opts)?
    } else if -a > c {
        integrate(|x| f(x) / x, a, -c, opts)?
    } else {
        0.0
    };
    Ok(symmetric + tail)
}
