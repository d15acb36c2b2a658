// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration management.
//!
//! The library functions take their tolerances as arguments; this
//! configuration supplies them for the command-line tool and for callers that
//! want a single place to set them.
//!
//! Configuration is loaded from multiple sources with the following priority
//! (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. liouville.yaml file
//! 3. Environment variables (QUBITOS_*)
//! 4. CLI arguments

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};
use crate::numerics::QuadratureOptions;

/// Default configuration file locations, tried in order.
const DEFAULT_CONFIG_PATHS: [&str; 2] = ["liouville.yaml", "liouville.yml"];

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Numerical tolerances
    #[serde(default)]
    pub numerics: NumericsConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => DEFAULT_CONFIG_PATHS
                .iter()
                .map(Path::new)
                .find(|p| p.exists())
                .map(Self::from_file)
                .transpose()?
                .unwrap_or_default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("QUBITOS_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("QUBITOS_ZERO_TOLERANCE") {
            if let Ok(tol) = val.parse() {
                self.numerics.zero_tolerance = tol;
            }
        }
        if let Ok(val) = env::var("QUBITOS_QUAD_REL_TOL") {
            if let Ok(tol) = val.parse() {
                self.numerics.quadrature.rel_tol = tol;
            }
        }
        if let Ok(val) = env::var("QUBITOS_QUAD_MAX_DEPTH") {
            if let Ok(depth) = val.parse() {
                self.numerics.quadrature.max_depth = depth;
            }
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        let n = &self.numerics;
        if !(n.zero_tolerance.is_finite() && n.zero_tolerance >= 0.0) {
            return Err(Error::Config(format!(
                "zero_tolerance must be finite and >= 0, got {}",
                n.zero_tolerance
            )));
        }
        if !(n.quadrature.abs_tol > 0.0 && n.quadrature.rel_tol > 0.0) {
            return Err(Error::Config(
                "quadrature tolerances must be > 0".into(),
            ));
        }
        if n.quadrature.max_depth == 0 {
            return Err(Error::Config("quadrature max_depth must be > 0".into()));
        }
        if n.quadrature.max_intervals == 0 {
            return Err(Error::Config(
                "quadrature max_intervals must be > 0".into(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(Error::Config(format!(
                "logging format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }
}

/// Numerical tolerances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericsConfig {
    /// Magnitude below which printed results are scrubbed to zero
    #[serde(default = "default_zero_tolerance")]
    pub zero_tolerance: f64,

    /// Principal-value quadrature settings
    #[serde(default)]
    pub quadrature: QuadratureOptions,
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self {
            zero_tolerance: default_zero_tolerance(),
            quadrature: QuadratureOptions::default(),
        }
    }
}

fn default_zero_tolerance() -> f64 {
    1e-12
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "text".into()
}
