// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QubitOS Liouville CLI
//!
//! Builds and applies superoperators for open-system model files.
//! Results are printed to stdout as JSON; logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Print the Lindbladian of a model
//! qubit-os-liouville lindbladian model.yaml
//!
//! # Evolve the model's initial state for t = 2.5
//! qubit-os-liouville evolve model.yaml --time 2.5
//!
//! # Reduced state after tracing out subsystems 2 and 3
//! qubit-os-liouville ptrace model.yaml --trace-out 2,3
//!
//! # Show effective configuration
//! qubit-os-liouville config
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ndarray::Array2;
use num_complex::Complex64;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qubit_os_liouville::{
    lindblad::propagate_superop,
    model::{MatrixSpec, OpenSystemModel},
    numerics::chop_matrix,
    operator::{purity, trace},
    partial_trace, Config, Result, VERSION,
};

/// QubitOS Liouville-space toolkit
#[derive(Parser)]
#[command(name = "qubit-os-liouville")]
#[command(author = "QubitOS Contributors")]
#[command(version = VERSION)]
#[command(about = "Lindbladians, propagation and partial traces for open quantum systems")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Lindbladian superoperator of a model
    Lindbladian {
        /// Model file
        model: PathBuf,
    },

    /// Propagate the model's initial state
    Evolve {
        /// Model file
        model: PathBuf,

        /// Evolution time
        #[arg(short, long)]
        time: f64,
    },

    /// Partial trace of the model's initial state
    Ptrace {
        /// Model file
        model: PathBuf,

        /// 1-based subsystems to trace out
        #[arg(short, long, value_delimiter = ',', required = true)]
        trace_out: Vec<usize>,
    },

    /// Show effective configuration
    Config,

    /// Validate configuration file
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_logging(&level, &config.logging.format);

    match cli.command {
        Commands::Lindbladian { model } => {
            config.validate()?;
            let model = load_model(&model)?;
            let generator = model.lindbladian()?;

            info!(dim = generator.nrows(), "built Lindbladian");
            print_json(&json!({
                "dim": generator.nrows(),
                "lindbladian": to_spec(&generator, &config),
            }))?;
        }

        Commands::Evolve { model, time } => {
            config.validate()?;
            let model = load_model(&model)?;
            let generator = model.lindbladian()?;
            let rho = propagate_superop(&generator, &model.initial_state()?, time)?;

            info!(time, purity = purity(&rho), "propagated initial state");
            print_json(&json!({
                "time": time,
                "trace": trace(&rho).re,
                "purity": purity(&rho),
                "state": to_spec(&rho, &config),
            }))?;
        }

        Commands::Ptrace { model, trace_out } => {
            config.validate()?;
            let model = load_model(&model)?;
            let dims = model.dims()?;
            let reduced = partial_trace(&model.initial_state()?, &trace_out, &dims)?;

            print_json(&json!({
                "dims": dims,
                "trace_out": trace_out,
                "reduced_state": to_spec(&reduced, &config),
            }))?;
        }

        Commands::Config => {
            // Show effective configuration
            println!("{}", serde_yaml::to_string(&config)?);
        }

        Commands::Validate => match config.validate() {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Initialize logging with tracing, writing to stderr.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (text, json) = if format == "json" {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (
            Some(fmt::layer().with_target(true).with_writer(std::io::stderr)),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();
}

fn load_model(path: &Path) -> Result<OpenSystemModel> {
    let model = OpenSystemModel::from_path(path)?;
    info!(
        path = %path.display(),
        jump_ops = model.jump_operators.len(),
        "loaded model"
    );
    Ok(model)
}

fn to_spec(a: &Array2<Complex64>, config: &Config) -> MatrixSpec {
    MatrixSpec::from_array(&chop_matrix(a, config.numerics.zero_tolerance))
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
