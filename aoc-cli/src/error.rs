//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// The `--cidr` argument did not parse
    #[error("Invalid CIDR {input:?}: {source}")]
    Cidr {
        input: String,
        #[source]
        source: aoc_solutions::exercises::cidr::CidrError,
    },

    /// Some parts did not produce an answer
    #[error("{0} part(s) failed")]
    Failed(usize),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Puzzle input could not be read
    #[error("Input for {year}/{day:02} unavailable: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Solver execution failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),
}

/// Input store errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file at the expected location
    #[error("no input file at {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
