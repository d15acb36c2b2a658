// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities.

use ndarray::Array2;
use num_complex::Complex64;
use rand::Rng;

/// Check matrix equality within tolerance.
pub fn assert_matrix_close(a: &Array2<Complex64>, b: &Array2<Complex64>, tol: f64) {
    assert_eq!(a.shape(), b.shape());
    for ((i, j), val) in a.indexed_iter() {
        let diff = (val - b[[i, j]]).norm();
        assert!(
            diff < tol,
            "Mismatch at ({}, {}): {:?} vs {:?} (diff={})",
            i,
            j,
            val,
            b[[i, j]],
            diff
        );
    }
}

/// Dense complex matrix with entries uniform in the unit square.
pub fn random_matrix<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Array2<Complex64> {
    Array2::from_shape_fn((rows, cols), |_| {
        Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
    })
}

/// Random Hermitian matrix.
pub fn random_hermitian<R: Rng>(rng: &mut R, d: usize) -> Array2<Complex64> {
    let a = random_matrix(rng, d, d);
    let a_dag = a.t().mapv(|z| z.conj());
    (&a + &a_dag) * Complex64::new(0.5, 0.0)
}

/// Random full-rank density matrix ρ = AA† / Tr(AA†).
pub fn random_density_matrix<R: Rng>(rng: &mut R, d: usize) -> Array2<Complex64> {
    let a = random_matrix(rng, d, d);
    let rho = a.dot(&a.t().mapv(|z| z.conj()));
    let tr: Complex64 = rho.diag().sum();
    rho / tr
}
