//! Seedable genetic optimization for tours and timetables.
//!
//! Provides a generic genetic algorithm and two genome models built on it:
//!
//! - **Genetic Algorithm (GA)**: Population-based evolutionary loop with
//!   pluggable selection (tournament, roulette), crossover, mutation and
//!   single-genome elitism. Every run returns a convergence trace.
//! - **TSP**: Permutation genomes scored by inverse closed-tour length,
//!   recombined with ordered crossover (OX) and swap mutation.
//! - **Schedule**: Timetable genomes (one class per slot and group) scored by
//!   a constraint-satisfaction function, recombined with single-point
//!   crossover and teacher/subject reassignment.
//! - **Scan**: Brute-force grid search for the maximum of a 1-D function.
//! - **Experiment**: Mutation-rate sweeps with tabulated results.
//!
//! # Reproducibility
//!
//! Every stochastic decision draws from one RNG created by
//! [`random::create_rng`]; a fixed seed reproduces a run exactly, with or
//! without parallel evaluation.
//!
//! # Features
//!
//! - `parallel`: evaluate populations with rayon
//! - `serde`: Serialize/Deserialize for configuration and domain types
//! - `plot`: SVG charts via plotters
//! - `cli`: the `u-evolve` command-line driver

pub mod error;
pub mod experiment;
pub mod ga;
#[cfg(feature = "plot")]
pub mod plot;
pub mod random;
pub mod scan;
pub mod schedule;
pub mod tsp;

pub use error::{Error, Result};
