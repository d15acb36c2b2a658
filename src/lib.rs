// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QubitOS Liouville-space linear algebra
//!
//! Dense-matrix building blocks for open quantum systems: composing and
//! reducing multipartite operators, mapping operators to Liouville-space
//! vectors, and assembling superoperators up to the full GKSL Lindbladian.
//!
//! # Conventions
//!
//! - Kronecker products put the first subsystem slowest:
//!   `flat = Σ_k i_k · stride_k` with `stride_k = Π_{j>k} d_j`.
//! - Vectorization stacks columns: `vec(A)[i + j·d] = A[i, j]`, so
//!   `vec(A ρ B) = (Bᵀ ⊗ A) vec(ρ)`.
//! - Subsystem indices passed to partial traces are 1-based.
//!
//! # Modules
//!
//! - [`tensor`]: Kronecker products and subsystem index arithmetic
//! - [`partial_trace`]: Reduced density matrices
//! - [`vectorize`]: Operator ↔ Liouville vector conversion
//! - [`superop`]: Left, right and sandwich superoperators
//! - [`lindblad`]: Unitary and dissipative generators
//! - [`expm`]: Matrix exponential
//! - [`numerics`]: Sinc, scrubbing and principal-value quadrature
//! - [`model`]: Open-system model files for the command-line tool
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod expm;
pub mod lindblad;
pub mod model;
pub mod numerics;
pub mod operator;
pub mod partial_trace;
pub mod superop;
pub mod tensor;
pub mod vectorize;

pub use config::Config;
pub use error::{Error, Result};
pub use lindblad::{
    dissipator_superop, hamiltonian_evolution_superop, lindbladian_superop, propagate_superop,
    time_evolution_operator, time_evolution_superop, DecayRates,
};
pub use partial_trace::partial_trace;
pub use superop::{
    anticommutator_superop, commutator_superop, left_right_superop, left_superop, right_superop,
};
pub use tensor::tensor;
pub use vectorize::{to_operator, to_vector};

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
