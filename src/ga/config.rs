//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{Error, Result};

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, run length, mutation rate, selection strategy,
/// reporting cadence and parallelism.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_selection(Selection::Roulette)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genomes in the population. Must be at least 2.
    pub population_size: usize,

    /// Number of generations to run. Zero evaluates the initial population only.
    pub generations: usize,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Selection strategy for building the mating pool.
    pub selection: Selection,

    /// Whether to evaluate genomes in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Report progress every `report_interval` generations (0 disables).
    pub report_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            mutation_rate: 0.01,
            selection: Selection::default(),
            parallel: false,
            seed: None,
            report_interval: 20,
        }
    }
}

impl GaConfig {
    /// Preset for permutation tours: tournament of 3, mutation rate 0.02.
    pub fn tsp() -> Self {
        Self {
            mutation_rate: 0.02,
            selection: Selection::Tournament(3),
            ..Self::default()
        }
    }

    /// Preset for timetables: roulette selection, population 50, mutation rate 0.1.
    pub fn schedule() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.1,
            selection: Selection::Roulette,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate. Not clamped; see [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for `Selection::Tournament(k)`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the reporting cadence (0 disables reporting).
    pub fn with_report_interval(mut self, every: usize) -> Self {
        self.report_interval = every;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`Error::InvalidConfiguration`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfiguration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(Error::InvalidConfiguration(
                "tournament size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
