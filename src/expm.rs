// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Matrix exponential via scaling-and-squaring with Padé(13) approximation.
//!
//! Implements the algorithm from:
//!   Higham (2005), "The Scaling and Squaring Method for the Matrix
//!   Exponential Revisited", SIAM J. Matrix Anal. Appl. 26(4), 1179.
//!
//! Used for unitary propagators `exp(-iHt)` (d × d) and for propagating a
//! Liouvillian `exp(𝓛t)` (d² × d²).

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::operator::{ensure_square, identity};

/// θ₁₃ from Higham (2005), Table 10.2.
const THETA_13: f64 = 5.37;

/// Padé(13,13) coefficients, Higham (2005) eq. (10.33).
const PADE_COEFFS: [f64; 14] = [
    1.0,
    0.5,
    0.12,
    1.833_333_333_333_333_4e-2,
    1.992_753_623_188_405_8e-3,
    1.630_434_782_608_696e-4,
    1.035_196_687_401_6e-5,
    5.175_983_437_008_01e-7,
    2.043_151_356_652_5e-8,
    6.306_022_705_717_593e-10,
    1.483_770_048_404_14e-11,
    2.529_153_491_597_966e-13,
    2.810_170_546_219_962_4e-15,
    1.544_049_750_670_309e-17,
];

/// Compute exp(A) for a square complex matrix.
///
/// # Errors
/// * `DimensionMismatch` if `a` is not square.
/// * `Singular` if the Padé denominator cannot be inverted (non-finite input).
pub fn matrix_exp(a: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    let n = ensure_square(a, "matrix_exp")?;

    match n {
        0 => return Ok(Array2::zeros((0, 0))),
        1 => return Ok(Array2::from_elem((1, 1), a[[0, 0]].exp())),
        _ => {}
    }

    // ||A/2^s||₁ < θ₁₃
    let norm = matrix_1_norm(a);
    let s = if norm > THETA_13 {
        (norm / THETA_13).log2().ceil() as i32
    } else {
        0
    };
    let a_scaled = a * c(2f64.powi(-s));

    let result = pade13(&a_scaled)?;
    Ok(square_repeatedly(result, s))
}

fn pade13(a: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    let eye = identity::<Complex64>(a.nrows());
    let b = |k: usize| c(PADE_COEFFS[k]);

    let a2 = a.dot(a);
    let a4 = a2.dot(&a2);
    let a6 = a2.dot(&a4);

    // U = A·[A6·(b13 A6 + b11 A4 + b9 A2) + b7 A6 + b5 A4 + b3 A2 + b1 I]
    let w1 = &a6 * b(13) + &a4 * b(11) + &a2 * b(9);
    let w2 = w1.dot(&a6) + &a6 * b(7) + &a4 * b(5) + &a2 * b(3) + &eye * b(1);
    let u = a.dot(&w2);

    // V = A6·(b12 A6 + b10 A4 + b8 A2) + b6 A6 + b4 A4 + b2 A2 + b0 I
    let v1 = &a6 * b(12) + &a4 * b(10) + &a2 * b(8);
    let v = v1.dot(&a6) + &a6 * b(6) + &a4 * b(4) + &a2 * b(2) + &eye * b(0);

    // exp(A) ≈ (V − U)⁻¹ (V + U)
    solve_linear(&v - &u, &v + &u)
}

#[inline]
fn c(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

/// Solve A·X = B by Gaussian elimination with partial pivoting.
fn solve_linear(
    mut a: Array2<Complex64>,
    mut b: Array2<Complex64>,
) -> Result<Array2<Complex64>> {
    let n = a.nrows();

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[[i, col]].norm().total_cmp(&a[[j, col]].norm()))
            .unwrap_or(col);
        if pivot_row != col {
            swap_rows(&mut a, col, pivot_row);
            swap_rows(&mut b, col, pivot_row);
        }

        let pivot = a[[col, col]];
        let magnitude = pivot.norm();
        if magnitude.is_nan() || magnitude <= f64::MIN_POSITIVE {
            return Err(Error::Singular {
                context: "matrix_exp".into(),
            });
        }

        for row in (col + 1)..n {
            let factor = a[[row, col]] / pivot;
            if factor == Complex64::new(0.0, 0.0) {
                continue;
            }
            for k in col..n {
                let val = a[[col, k]];
                a[[row, k]] -= factor * val;
            }
            for k in 0..b.ncols() {
                let val = b[[col, k]];
                b[[row, k]] -= factor * val;
            }
        }
    }

    // Back substitution in place.
    for col in (0..n).rev() {
        let pivot = a[[col, col]];
        for j in 0..b.ncols() {
            let mut sum = b[[col, j]];
            for k in (col + 1)..n {
                sum -= a[[col, k]] * b[[k, j]];
            }
            b[[col, j]] = sum / pivot;
        }
    }
    Ok(b)
}

fn swap_rows(m: &mut Array2<Complex64>, i: usize, j: usize) {
    for k in 0..m.ncols() {
        m.swap([i, k], [j, k]);
    }
}

/// M^(2^s)
fn square_repeatedly(mut m: Array2<Complex64>, s: i32) -> Array2<Complex64> {
    for _ in 0..s {
        m = m.dot(&m);
    }
    m
}

/// Max column sum of absolute values.
fn matrix_1_norm(a: &Array2<Complex64>) -> f64 {
    a.columns()
        .into_iter()
        .map(|col| col.iter().map(|z| z.norm()).sum::<f64>())
        .fold(0.0, f64::max)
}
