// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Unitary and dissipative evolution in Liouville space.
//!
//! Implements the generator of the Gorini–Kossakowski–Sudarshan–Lindblad
//! (GKSL) master equation as a superoperator on column-stacked ρ:
//!
//!   dρ/dt = -i[H, ρ] + Σ_{n,m} γ_nm (L_n ρ L_m† − ½{L_m†L_n, ρ})
//!
//! This module provides:
//! - Unitary propagators exp(−iHt) and their superoperators
//! - The Hamiltonian generator −i[H, ·]
//! - Dissipators for diagonal and general (Kossakowski) rate specifications
//! - The full Lindbladian and its finite-time propagation
//!
//! # Example
//!
//! ```ignore
//! use qubit_os_liouville::lindblad::{lindbladian_superop, propagate_superop, DecayRates};
//!
//! let generator = lindbladian_superop(&h, &[sigma_minus], &DecayRates::PerChannel(vec![0.1]))?;
//! let rho_t = propagate_superop(&generator, &rho0, 5.0)?;
//! ```
//!
//! # References
//!
//! - Lindblad, G. (1976). Commun. Math. Phys. 48, 119.
//!   DOI: 10.1007/BF01608499
//! - Gorini, V., Kossakowski, A., & Sudarshan, E. C. G. (1976). J. Math. Phys. 17, 821.
//!   DOI: 10.1063/1.522979
//! - Breuer, H.-P. & Petruccione, F. (2002). "The Theory of Open Quantum Systems." Oxford.

pub mod dissipator;
pub mod evolution;
pub mod types;

pub use dissipator::{
    cross_dissipator_superop, dissipator, dissipator_superop, lindblad_rhs, lindbladian_superop,
};
pub use evolution::{
    hamiltonian_evolution_superop, propagate_superop, time_evolution_operator,
    time_evolution_superop,
};
pub use types::{DecayRates, JumpChannel};
