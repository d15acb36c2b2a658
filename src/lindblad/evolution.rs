// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Unitary evolution and its Liouville-space generator.
//!
//! Hamiltonians are replaced by their Hermitian part `(H + H†)/2` before use,
//! so slightly non-Hermitian input (round-off from numerical construction)
//! still yields a unitary propagator. A warning is logged when the
//! discarded anti-Hermitian part is not negligible.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::warn;

use crate::error::Result;
use crate::expm::matrix_exp;
use crate::operator::{dagger, hermitian_part, hermiticity_defect};
use crate::superop::{apply_superop, commutator_superop, left_right_superop};

/// Anti-Hermitian deviation above which symmetrization is reported.
const HERMITICITY_WARN_TOLERANCE: f64 = 1e-10;

/// Hermitian part of `h`, warning when it differs from `h`.
fn hermitian_hamiltonian(h: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    let herm = hermitian_part(h)?;
    let defect = hermiticity_defect(h)?;
    if defect > HERMITICITY_WARN_TOLERANCE {
        warn!(
            defect,
            dim = h.nrows(),
            "Hamiltonian is not Hermitian; using its Hermitian part"
        );
    }
    Ok(herm)
}

/// Propagator U(t) = exp(−i H t).
///
/// # Errors
/// `DimensionMismatch` if `h` is not square.
pub fn time_evolution_operator(h: &Array2<Complex64>, t: f64) -> Result<Array2<Complex64>> {
    let herm = hermitian_hamiltonian(h)?;
    matrix_exp(&(herm * Complex64::new(0.0, -t)))
}

/// Superoperator of ρ ↦ U ρ U† with U = exp(−i H t).
pub fn time_evolution_superop(h: &Array2<Complex64>, t: f64) -> Result<Array2<Complex64>> {
    let u = time_evolution_operator(h, t)?;
    Ok(left_right_superop(&u, &dagger(&u)))
}

/// Liouvillian generator ρ ↦ −i[H, ρ].
pub fn hamiltonian_evolution_superop(h: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    let herm = hermitian_hamiltonian(h)?;
    Ok(commutator_superop(&herm)? * Complex64::new(0.0, -1.0))
}

/// Solve dρ/dt = 𝓛(ρ) for time `t`: `to_operator(exp(𝓛 t) · vec(ρ))`.
///
/// `generator` is any (d² × d²) superoperator, typically from
/// [`lindbladian_superop`](super::lindbladian_superop).
pub fn propagate_superop(
    generator: &Array2<Complex64>,
    rho: &Array2<Complex64>,
    t: f64,
) -> Result<Array2<Complex64>> {
    let propagator = matrix_exp(&(generator * Complex64::new(t, 0.0)))?;
    apply_superop(&propagator, rho)
}
