// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Liouville-space superoperators acting on column-stacked operators.
//!
//! With `vec` from [`crate::vectorize`]:
//!
//! | superoperator              | matrix    | action       |
//! |----------------------------|-----------|--------------|
//! | [`left_superop`]`(A)`      | `I ⊗ A`   | `A·ρ`        |
//! | [`right_superop`]`(A)`     | `Aᵀ ⊗ I`  | `ρ·A`        |
//! | [`left_right_superop`]`(A, B)` | `Bᵀ ⊗ A` | `A·ρ·B`   |
//! | [`commutator_superop`]`(A)`    |        | `A·ρ − ρ·A`  |
//! | [`anticommutator_superop`]`(A)`|        | `A·ρ + ρ·A`  |

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::operator::{ensure_square, identity, Scalar};
use crate::tensor::kron;
use crate::vectorize::{to_operator, to_vector};

/// `ρ ↦ A·ρ` for `ρ` with `a.ncols()` columns.
pub fn left_superop<A: Scalar>(a: &Array2<A>) -> Array2<A> {
    left_superop_dim(a, a.ncols())
}

/// `ρ ↦ A·ρ` for `ρ` with `d` columns: `I_d ⊗ A`.
pub fn left_superop_dim<A: Scalar>(a: &Array2<A>, d: usize) -> Array2<A> {
    kron(&identity::<A>(d), a)
}

/// `ρ ↦ ρ·A` for `ρ` with `a.nrows()` rows.
pub fn right_superop<A: Scalar>(a: &Array2<A>) -> Array2<A> {
    right_superop_dim(a, a.nrows())
}

/// `ρ ↦ ρ·A` for `ρ` with `d` rows: `Aᵀ ⊗ I_d`.
pub fn right_superop_dim<A: Scalar>(a: &Array2<A>, d: usize) -> Array2<A> {
    kron(&a.t(), &identity::<A>(d))
}

/// `ρ ↦ A·ρ·B`: `Bᵀ ⊗ A`.
pub fn left_right_superop<A: Scalar>(a: &Array2<A>, b: &Array2<A>) -> Array2<A> {
    kron(&b.t(), a)
}

/// `ρ ↦ A·ρ − ρ·A`.
pub fn commutator_superop<A: Scalar>(a: &Array2<A>) -> Result<Array2<A>> {
    ensure_square(a, "commutator_superop")?;
    Ok(left_superop(a) - right_superop(a))
}

/// `ρ ↦ A·ρ + ρ·A`.
pub fn anticommutator_superop<A: Scalar>(a: &Array2<A>) -> Result<Array2<A>> {
    ensure_square(a, "anticommutator_superop")?;
    Ok(left_superop(a) + right_superop(a))
}

/// Apply a superoperator to an operator: `to_operator(S · to_vector(ρ))`.
///
/// # Errors
/// `DimensionMismatch` if `S` does not act on `ρ`'s vectorization or does
/// not map it to a square operator.
pub fn apply_superop<A: Scalar>(superop: &Array2<A>, rho: &Array2<A>) -> Result<Array2<A>> {
    if superop.ncols() != rho.len() {
        return Err(Error::dimension(
            "apply_superop",
            format!("operator with {} entries", superop.ncols()),
            format!("{} x {}", rho.nrows(), rho.ncols()),
        ));
    }
    to_operator(&superop.dot(&to_vector(rho)))
}
