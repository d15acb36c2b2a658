// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Lindblad master equation types.
//!
//! Ref: Lindblad (1976), Commun. Math. Phys. 48, 119.
//! Ref: Gorini, Kossakowski, Sudarshan (1976), J. Math. Phys. 17, 821.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::operator::ensure_square;

/// Decay rates pairing jump operators in a Lindbladian.
///
/// `PerChannel(γ)` gives `Σ_k γ_k D[L_k]`; `Matrix(γ)` gives the
/// Kossakowski form `Σ_{n,m} γ_nm D[L_n, L_m]` with
/// `D[L, M](ρ) = L ρ M† − ½{M†L, ρ}`.
#[derive(Debug, Clone, PartialEq)]
pub enum DecayRates {
    /// One nonnegative rate per jump operator.
    PerChannel(Vec<f64>),
    /// Square cross-rate matrix indexed by jump operator.
    Matrix(Array2<Complex64>),
}

impl DecayRates {
    /// No dissipation.
    pub fn none() -> Self {
        DecayRates::PerChannel(Vec::new())
    }

    /// The same rate on each of `n` channels.
    pub fn uniform(n: usize, rate: f64) -> Self {
        DecayRates::PerChannel(vec![rate; n])
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            DecayRates::PerChannel(_) => "per-channel",
            DecayRates::Matrix(_) => "matrix",
        }
    }

    /// Check the rates against the number of jump operators.
    pub fn validate(&self, num_jump_ops: usize) -> Result<()> {
        match self {
            DecayRates::PerChannel(rates) => {
                if rates.len() != num_jump_ops {
                    return Err(Error::invalid(
                        "lindbladian_superop",
                        format!(
                            "{} jump operators but {} rates",
                            num_jump_ops,
                            rates.len()
                        ),
                    ));
                }
                if let Some((k, rate)) = rates
                    .iter()
                    .enumerate()
                    .find(|(_, r)| !r.is_finite() || **r < 0.0)
                {
                    return Err(Error::invalid(
                        "lindbladian_superop",
                        format!("rate {k} must be finite and nonnegative, got {rate}"),
                    ));
                }
            }
            DecayRates::Matrix(gamma) => {
                if gamma.nrows() != gamma.ncols() {
                    return Err(Error::invalid(
                        "lindbladian_superop",
                        format!(
                            "rate matrix must be square, got {} x {}",
                            gamma.nrows(),
                            gamma.ncols()
                        ),
                    ));
                }
                let side = gamma.nrows();
                if side != num_jump_ops {
                    return Err(Error::invalid(
                        "lindbladian_superop",
                        format!(
                            "rate matrix is {side} x {side} but there are {num_jump_ops} jump operators"
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl From<Vec<f64>> for DecayRates {
    fn from(rates: Vec<f64>) -> Self {
        DecayRates::PerChannel(rates)
    }
}

impl From<Array2<Complex64>> for DecayRates {
    fn from(gamma: Array2<Complex64>) -> Self {
        DecayRates::Matrix(gamma)
    }
}

/// A jump operator with its rate, for direct (non-vectorized) evaluation.
///
/// Represents a single dissipation channel:
///   γ D[L](ρ) = γ (L ρ L† − ½{L†L, ρ})
#[derive(Debug, Clone)]
pub struct JumpChannel {
    /// Operator matrix (d × d).
    pub operator: Array2<Complex64>,
    /// Decay rate.
    pub rate: f64,
    /// Human-readable label (e.g., "T1_q0").
    pub label: String,
}

impl JumpChannel {
    /// Create a channel, checking the operator is square and the rate is
    /// finite and nonnegative.
    pub fn new(operator: Array2<Complex64>, rate: f64, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        ensure_square(&operator, "JumpChannel")?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(Error::invalid(
                "JumpChannel",
                format!("channel '{label}' has invalid rate {rate:.2e}"),
            ));
        }
        Ok(Self {
            operator,
            rate,
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sigma_minus() -> Array2<Complex64> {
        let mut m = Array2::zeros((2, 2));
        m[[0, 1]] = Complex64::new(1.0, 0.0);
        m
    }

    #[test]
    fn test_per_channel_length_mismatch() {
        let err = DecayRates::PerChannel(vec![1.0]).validate(2).unwrap_err();
        assert!(err.to_string().contains("2 jump operators but 1 rates"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(DecayRates::PerChannel(vec![1.0, -0.5]).validate(2).is_err());
        assert!(DecayRates::PerChannel(vec![f64::NAN]).validate(1).is_err());
    }

    #[test]
    fn test_rate_matrix_must_be_square() {
        let gamma = Array2::<Complex64>::zeros((2, 3));
        let err = DecayRates::Matrix(gamma).validate(2).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_rate_matrix_side_must_match() {
        let gamma = Array2::<Complex64>::eye(3);
        assert!(DecayRates::Matrix(gamma.clone()).validate(2).is_err());
        assert!(DecayRates::Matrix(gamma).validate(3).is_ok());
    }

    #[test]
    fn test_none_and_uniform() {
        assert!(DecayRates::none().validate(0).is_ok());
        assert_eq!(
            DecayRates::uniform(3, 0.5),
            DecayRates::PerChannel(vec![0.5, 0.5, 0.5])
        );
        assert_eq!(DecayRates::from(vec![1.0]).kind(), "per-channel");
        assert_eq!(DecayRates::from(Array2::<Complex64>::eye(1)).kind(), "matrix");
    }

    #[test]
    fn test_jump_channel_validation() {
        assert!(JumpChannel::new(sigma_minus(), 1e6, "T1_q0").is_ok());
        assert!(JumpChannel::new(sigma_minus(), -1.0, "T1_q0").is_err());
        assert!(JumpChannel::new(Array2::zeros((2, 3)), 1.0, "bad").is_err());
    }
}
