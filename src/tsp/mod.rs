//! Traveling Salesman genome model.
//!
//! Tours are permutations of city indices, recombined with ordered
//! crossover (OX) and perturbed with swap mutation. Fitness is the inverse
//! of the closed tour length, so higher is better.
//!
//! Use [`GaConfig::tsp`](crate::ga::GaConfig::tsp) for the usual parameters
//! (tournament of 3, mutation rate 0.02).

mod problem;
mod types;

pub use problem::TspProblem;
pub use types::Point;
