// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Column-stacking vectorization of operators.
//!
//! `vec(A)[i + j·d] = A[i, j]`, so that `vec(A·ρ·B) = (Bᵀ ⊗ A)·vec(ρ)`.

use ndarray::{Array1, Array2};

use crate::error::{Error, Result};

/// Stack the columns of `a` into a single vector.
pub fn to_vector<A: Clone>(a: &Array2<A>) -> Array1<A> {
    a.t().iter().cloned().collect()
}

/// Inverse of [`to_vector`] for a square operator, inferring `d = √len`.
///
/// # Errors
/// `DimensionMismatch` if `v.len()` is not a perfect square.
pub fn to_operator<A: Clone>(v: &Array1<A>) -> Result<Array2<A>> {
    let d = (v.len() as f64).sqrt().round() as usize;
    to_operator_with_dim(v, d)
}

/// Inverse of [`to_vector`] for a `d × d` operator.
///
/// # Errors
/// `DimensionMismatch` if `d * d != v.len()`.
pub fn to_operator_with_dim<A: Clone>(v: &Array1<A>, d: usize) -> Result<Array2<A>> {
    if d.checked_mul(d) != Some(v.len()) {
        return Err(Error::dimension(
            "to_operator",
            format!("vector of length {d}² for a {d} x {d} operator"),
            format!("length {}", v.len()),
        ));
    }
    Ok(Array2::from_shape_fn((d, d), |(i, j)| v[i + j * d].clone()))
}
