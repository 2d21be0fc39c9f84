//! Genetic Algorithm framework.
//!
//! A generic GA built on trait-based abstractions. Genome models implement
//! [`GaProblem`], which specifies how to create, evaluate, recombine, mutate
//! and validate genomes; the runner owns the population and the loop.
//!
//! # Core Traits
//!
//! - [`GaProblem`]: Genome model: initialization, evaluation, operators
//! - [`Fitness`]: Scalar score type (higher is better)
//! - [`Reporter`]: Progress sink, purely observational
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, selection, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final best genome with its [`ConvergenceTrace`]
//!
//! # Generation cycle
//!
//! evaluate → record best/mean → select mating pool → pairwise crossover →
//! per-offspring mutation → elitism (best genome copied into slot 0).
//!
//! # Submodules
//!
//! - [`operators`]: Ordered crossover (OX), single-point crossover, swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod report;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use report::{ConvergenceTrace, GenerationStats, NoReport, Reporter, TracingReporter};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{Fitness, GaProblem};
