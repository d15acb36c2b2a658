// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Lindblad dissipators and the full Lindbladian.
//!
//! D[L, M](ρ) = L ρ M† − ½{M†L, ρ}, with D[L] = D[L, L].
//!
//! Superoperator forms ([`dissipator_superop`], [`lindbladian_superop`]) are
//! (d² × d²) matrices on column-stacked ρ. The direct forms ([`dissipator`],
//! [`lindblad_rhs`]) evaluate the same maps on a given ρ without building
//! the superoperator.
//!
//! Ref: Breuer & Petruccione, "The Theory of Open Quantum Systems" (2002), Ch. 3.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::{debug, warn};

use super::evolution::hamiltonian_evolution_superop;
use super::types::{DecayRates, JumpChannel};
use crate::error::{Error, Result};
use crate::operator::{dagger, ensure_square, hermiticity_defect};
use crate::superop::{anticommutator_superop, left_right_superop};

/// Superoperator of D[L](ρ) = L ρ L† − ½{L†L, ρ}.
pub fn dissipator_superop(l: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    cross_dissipator_superop(l, l)
}

/// Superoperator of D[L, M](ρ) = L ρ M† − ½{M†L, ρ}.
///
/// # Errors
/// `DimensionMismatch` unless `l` and `m` are square and the same size.
pub fn cross_dissipator_superop(
    l: &Array2<Complex64>,
    m: &Array2<Complex64>,
) -> Result<Array2<Complex64>> {
    check_same_shape(l, m, "dissipator_superop")?;
    let m_dag = dagger(m);
    let m_dag_l = m_dag.dot(l);
    let half = Complex64::new(0.5, 0.0);
    Ok(left_right_superop(l, &m_dag) - anticommutator_superop(&m_dag_l)? * half)
}

/// Lindbladian 𝓛 = −i[H, ·] + Σ rates · D[…].
///
/// With [`DecayRates::PerChannel`], `𝓛 = −i[H, ·] + Σ_k γ_k D[L_k]`; with
/// [`DecayRates::Matrix`], `𝓛 = −i[H, ·] + Σ_{n,m} γ_nm D[L_n, L_m]`.
/// No jump operators and no rates gives the Hamiltonian generator alone.
///
/// # Errors
/// * `DimensionMismatch` if `h` is not square.
/// * `InvalidArgument` if a jump operator's shape differs from `h`'s or the
///   rates do not match the jump operators (see [`DecayRates::validate`]).
pub fn lindbladian_superop(
    h: &Array2<Complex64>,
    jump_ops: &[Array2<Complex64>],
    rates: &DecayRates,
) -> Result<Array2<Complex64>> {
    ensure_square(h, "lindbladian_superop")?;
    if let Some((k, op)) = jump_ops.iter().enumerate().find(|(_, op)| op.dim() != h.dim()) {
        return Err(Error::invalid(
            "lindbladian_superop",
            format!(
                "jump operator {k} is {} x {} but the Hamiltonian is {} x {}",
                op.nrows(),
                op.ncols(),
                h.nrows(),
                h.ncols()
            ),
        ));
    }
    rates.validate(jump_ops.len())?;

    debug!(
        dim = h.nrows(),
        jump_ops = jump_ops.len(),
        rates = rates.kind(),
        "building Lindbladian"
    );

    let mut generator = hamiltonian_evolution_superop(h)?;
    match rates {
        DecayRates::PerChannel(gammas) => {
            for (l, &gamma) in jump_ops.iter().zip(gammas) {
                if gamma == 0.0 {
                    continue;
                }
                generator = generator + dissipator_superop(l)? * Complex64::new(gamma, 0.0);
            }
        }
        DecayRates::Matrix(gamma) => {
            let defect = hermiticity_defect(gamma)?;
            if defect > 1e-10 {
                warn!(defect, "rate matrix is not Hermitian");
            }
            for ((n, m), &g) in gamma.indexed_iter() {
                if g == Complex64::new(0.0, 0.0) {
                    continue;
                }
                generator =
                    generator + cross_dissipator_superop(&jump_ops[n], &jump_ops[m])? * g;
            }
        }
    }
    Ok(generator)
}

/// Evaluate D[L, M](ρ) = L ρ M† − ½ M†L ρ − ½ ρ M†L directly.
pub fn dissipator(
    l: &Array2<Complex64>,
    m: &Array2<Complex64>,
    rho: &Array2<Complex64>,
) -> Result<Array2<Complex64>> {
    check_same_shape(l, m, "dissipator")?;
    check_same_shape(l, rho, "dissipator")?;

    let m_dag = dagger(m);
    // M†L
    let m_dag_l = m_dag.dot(l);
    // L ρ M†
    let l_rho_mdag = l.dot(rho).dot(&m_dag);
    let half = Complex64::new(0.5, 0.0);

    Ok(l_rho_mdag - (m_dag_l.dot(rho) + rho.dot(&m_dag_l)) * half)
}

/// Evaluate dρ/dt = −i[H, ρ] + Σ_k γ_k D[L_k](ρ) directly.
///
/// Unlike the superoperator path, `h` is used as given (not symmetrized).
///
/// # Errors
/// `DimensionMismatch` if any channel's operator does not match ρ's size.
pub fn lindblad_rhs(
    hamiltonian: &Array2<Complex64>,
    channels: &[JumpChannel],
    rho: &Array2<Complex64>,
) -> Result<Array2<Complex64>> {
    check_same_shape(hamiltonian, rho, "lindblad_rhs")?;
    for channel in channels {
        check_same_shape(&channel.operator, rho, "lindblad_rhs").map_err(|_| {
            Error::dimension(
                "lindblad_rhs",
                format!("{0} x {0} operator", rho.nrows()),
                format!(
                    "channel '{}' with {} x {}",
                    channel.label,
                    channel.operator.nrows(),
                    channel.operator.ncols()
                ),
            )
        })?;
    }

    // −i(Hρ − ρH)
    let i = Complex64::new(0.0, 1.0);
    let mut total = (hamiltonian.dot(rho) - rho.dot(hamiltonian)) * -i;

    for channel in channels {
        if channel.rate == 0.0 {
            continue;
        }
        let l = &channel.operator;
        total = total + dissipator(l, l, rho)? * Complex64::new(channel.rate, 0.0);
    }
    Ok(total)
}

fn check_same_shape(
    reference: &Array2<Complex64>,
    other: &Array2<Complex64>,
    context: &str,
) -> Result<()> {
    let d = ensure_square(reference, context)?;
    if other.dim() != (d, d) {
        return Err(Error::dimension(
            context,
            format!("{d} x {d}"),
            format!("{} x {}", other.nrows(), other.ncols()),
        ));
    }
    Ok(())
}
