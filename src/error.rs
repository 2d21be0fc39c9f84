//! Error types shared by the optimizer and the genome models.

use thiserror::Error;

/// Errors raised while configuring or running an optimization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter is outside its valid range. Raised before any generation runs.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A genetic operator produced a genome that breaks the model's structure.
    #[error("invalid genome: {0}")]
    InvalidGenome(String),

    /// Fitness cannot be computed for a genome (e.g. a zero-length tour).
    #[error("degenerate fitness: {0}")]
    DegenerateFitness(String),

    /// The chart backend failed to render or write a plot.
    #[cfg(feature = "plot")]
    #[error("plot error: {0}")]
    Plot(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
