// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Open-system model files.
//!
//! A model names a Hamiltonian, jump operators with rates, and optionally a
//! subsystem decomposition and an initial state. Matrices are nested lists;
//! each entry is either a real number or an `[re, im]` pair:
//!
//! ```yaml
//! hamiltonian: [[0.5, 0], [0, -0.5]]
//! jump_operators:
//!   - [[0, 1], [0, 0]]
//! rates: [0.1]
//! initial_state: [[0, 0], [0, 1]]
//! ```
//!
//! `rates` may also be a square matrix for cross-rate (Kossakowski) terms.

use std::path::Path;

use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lindblad::{lindbladian_superop, DecayRates};

/// One matrix entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Real(f64),
    Complex([f64; 2]),
}

impl From<Entry> for Complex64 {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Real(re) => Complex64::new(re, 0.0),
            Entry::Complex([re, im]) => Complex64::new(re, im),
        }
    }
}

/// Row-major nested-list matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixSpec(pub Vec<Vec<Entry>>);

impl MatrixSpec {
    /// Convert to a dense complex matrix.
    ///
    /// # Errors
    /// `DimensionMismatch` if the rows have different lengths.
    pub fn to_array(&self, name: &str) -> Result<Array2<Complex64>> {
        let rows = self.0.len();
        let cols = self.0.first().map_or(0, Vec::len);
        if let Some((i, row)) = self.0.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::dimension(
                format!("model field '{name}'"),
                format!("{cols} entries per row"),
                format!("{} entries in row {i}", row.len()),
            ));
        }
        Ok(Array2::from_shape_fn((rows, cols), |(i, j)| {
            self.0[i][j].into()
        }))
    }

    /// Build from a dense complex matrix, writing real entries as plain
    /// numbers.
    pub fn from_array(a: &Array2<Complex64>) -> Self {
        MatrixSpec(
            a.rows()
                .into_iter()
                .map(|row| {
                    row.iter()
                        .map(|z| {
                            if z.im == 0.0 {
                                Entry::Real(z.re)
                            } else {
                                Entry::Complex([z.re, z.im])
                            }
                        })
                        .collect()
                })
                .collect(),
        )
    }
}

/// Rate specification as written in a model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatesSpec {
    List(Vec<f64>),
    Matrix(MatrixSpec),
}

impl Default for RatesSpec {
    fn default() -> Self {
        RatesSpec::List(Vec::new())
    }
}

/// An open quantum system described in a model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenSystemModel {
    /// System Hamiltonian
    pub hamiltonian: MatrixSpec,

    /// Jump operators
    #[serde(default)]
    pub jump_operators: Vec<MatrixSpec>,

    /// Decay rates paired with `jump_operators`
    #[serde(default)]
    pub rates: RatesSpec,

    /// Subsystem decomposition of the Hilbert space
    #[serde(default)]
    pub dims: Option<Vec<usize>>,

    /// Initial density matrix
    #[serde(default)]
    pub initial_state: Option<MatrixSpec>,
}

impl OpenSystemModel {
    /// Load a model from a YAML (or JSON) file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a model from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn hamiltonian(&self) -> Result<Array2<Complex64>> {
        self.hamiltonian.to_array("hamiltonian")
    }

    pub fn jump_operators(&self) -> Result<Vec<Array2<Complex64>>> {
        self.jump_operators
            .iter()
            .enumerate()
            .map(|(k, op)| op.to_array(&format!("jump_operators[{k}]")))
            .collect()
    }

    pub fn decay_rates(&self) -> Result<DecayRates> {
        Ok(match &self.rates {
            RatesSpec::List(rates) => DecayRates::PerChannel(rates.clone()),
            RatesSpec::Matrix(gamma) => DecayRates::Matrix(gamma.to_array("rates")?),
        })
    }

    /// Subsystem dimensions, defaulting to a single system of the
    /// Hamiltonian's size.
    pub fn dims(&self) -> Result<Vec<usize>> {
        match &self.dims {
            Some(dims) => Ok(dims.clone()),
            None => Ok(vec![self.hamiltonian()?.nrows()]),
        }
    }

    /// Initial density matrix.
    ///
    /// # Errors
    /// `Config` if the model has no `initial_state`.
    pub fn initial_state(&self) -> Result<Array2<Complex64>> {
        self.initial_state
            .as_ref()
            .ok_or_else(|| Error::Config("model has no initial_state".into()))?
            .to_array("initial_state")
    }

    /// The model's Lindbladian superoperator.
    pub fn lindbladian(&self) -> Result<Array2<Complex64>> {
        lindbladian_superop(
            &self.hamiltonian()?,
            &self.jump_operators()?,
            &self.decay_rates()?,
        )
    }
}
