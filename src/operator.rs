// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Element types and elementary operator helpers.
//!
//! The structural routines (tensor products, partial traces, vectorization,
//! superoperators) are generic over [`Scalar`], which covers real and complex
//! single/double precision. Evolution and dissipation work in `Complex64`.

use std::fmt::Debug;

use ndarray::{Array1, Array2, LinalgScalar, ScalarOperand};
use num_complex::{Complex32, Complex64};

use crate::error::{Error, Result};

/// Floating-point element type usable in operators.
pub trait Scalar: LinalgScalar + ScalarOperand + Debug + Send + Sync {
    /// Complex conjugate (identity for real types).
    fn conj(self) -> Self;

    /// Embed a real number.
    fn from_real(x: f64) -> Self;

    /// Modulus as `f64`.
    fn modulus(self) -> f64;
}

impl Scalar for f32 {
    fn conj(self) -> Self {
        self
    }
    fn from_real(x: f64) -> Self {
        x as f32
    }
    fn modulus(self) -> f64 {
        self.abs() as f64
    }
}

impl Scalar for f64 {
    fn conj(self) -> Self {
        self
    }
    fn from_real(x: f64) -> Self {
        x
    }
    fn modulus(self) -> f64 {
        self.abs()
    }
}

impl Scalar for Complex32 {
    fn conj(self) -> Self {
        Complex32::conj(&self)
    }
    fn from_real(x: f64) -> Self {
        Complex32::new(x as f32, 0.0)
    }
    fn modulus(self) -> f64 {
        self.norm() as f64
    }
}

impl Scalar for Complex64 {
    fn conj(self) -> Self {
        Complex64::conj(&self)
    }
    fn from_real(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }
    fn modulus(self) -> f64 {
        self.norm()
    }
}

/// Fail with `DimensionMismatch` unless `a` is square.
pub fn ensure_square<A>(a: &Array2<A>, context: &str) -> Result<usize> {
    if a.nrows() != a.ncols() {
        return Err(Error::dimension(
            context,
            "a square matrix",
            format!("{} x {}", a.nrows(), a.ncols()),
        ));
    }
    Ok(a.nrows())
}

/// Identity operator of dimension `d`.
pub fn identity<A: Scalar>(d: usize) -> Array2<A> {
    Array2::eye(d)
}

/// Conjugate transpose A†.
pub fn dagger<A: Scalar>(a: &Array2<A>) -> Array2<A> {
    a.t().mapv(A::conj)
}

/// Hermitian part (A + A†) / 2.
pub fn hermitian_part<A: Scalar>(a: &Array2<A>) -> Result<Array2<A>> {
    ensure_square(a, "hermitian_part")?;
    Ok((a + &dagger(a)) * A::from_real(0.5))
}

/// Largest elementwise deviation |A − A†|; zero for Hermitian input.
///
/// # Errors
/// `DimensionMismatch` if `a` is not square.
pub fn hermiticity_defect<A: Scalar>(a: &Array2<A>) -> Result<f64> {
    ensure_square(a, "hermiticity_defect")?;
    Ok(a.indexed_iter()
        .map(|((i, j), &z)| (z - a[[j, i]].conj()).modulus())
        .fold(0.0, f64::max))
}

/// Trace Σ_i A_ii.
pub fn trace<A: Scalar>(a: &Array2<A>) -> A {
    a.diag().iter().fold(A::zero(), |acc, &z| acc + z)
}

/// Purity Tr(ρ²) of a density matrix (real part).
pub fn purity(rho: &Array2<Complex64>) -> f64 {
    trace(&rho.dot(rho)).re
}

/// Projector |ψ⟩⟨ψ| of a state vector.
pub fn outer_product<A: Scalar>(psi: &Array1<A>) -> Array2<A> {
    let d = psi.len();
    Array2::from_shape_fn((d, d), |(i, j)| psi[i] * psi[j].conj())
}
