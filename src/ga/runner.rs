//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → elitism → repeat.

use super::config::GaConfig;
use super::report::{ConvergenceTrace, GenerationStats, NoReport, Reporter};
use super::types::{Fitness, GaProblem};
use crate::error::Result;
use crate::random::rng_from;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<G, F> {
    /// The best genome of the final evaluation.
    pub best: G,

    /// Fitness of `best`.
    pub best_fitness: F,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best and average fitness of every generation.
    pub trace: ConvergenceTrace,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with reporting disabled.
    ///
    /// Fails with [`Error::InvalidConfiguration`](crate::error::Error::InvalidConfiguration)
    /// before any work if `config` is invalid.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Genome, P::Fitness>> {
        Self::run_with_reporter(problem, config, &mut NoReport)
    }

    /// Runs the GA, sending progress to `reporter` every
    /// `config.report_interval` generations.
    pub fn run_with_reporter<P, Rep>(
        problem: &P,
        config: &GaConfig,
        reporter: &mut Rep,
    ) -> Result<GaResult<P::Genome, P::Fitness>>
    where
        P: GaProblem,
        Rep: Reporter + ?Sized,
    {
        config.validate()?;
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(problem, config, &mut rng, reporter)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random stream.
    pub fn run_with_rng<P, R, Rep>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        reporter: &mut Rep,
    ) -> Result<GaResult<P::Genome, P::Fitness>>
    where
        P: GaProblem,
        R: Rng,
        Rep: Reporter + ?Sized,
    {
        config.validate()?;
        tracing::debug!(
            population = config.population_size,
            generations = config.generations,
            mutation_rate = config.mutation_rate,
            selection = ?config.selection,
            "starting GA run"
        );

        // 1. Initialize population
        let mut population: Vec<P::Genome> = (0..config.population_size)
            .map(|_| problem.create_genome(rng))
            .collect();

        let mut trace = ConvergenceTrace::with_capacity(config.generations);

        // 2. Evolutionary loop
        for generation in 0..config.generations {
            let fitness = evaluate_population(problem, &population, config.parallel)?;
            let best_idx = best_index(&fitness);
            let scores: Vec<f64> = fitness.iter().map(|f| f.to_f64()).collect();

            let stats = GenerationStats {
                generation,
                best_fitness: scores[best_idx],
                average_fitness: scores.iter().sum::<f64>() / scores.len() as f64,
            };
            trace.push(stats.best_fitness, stats.average_fitness);
            if config.report_interval > 0 && generation % config.report_interval == 0 {
                reporter.report(&stats);
            }

            // Selection
            let pool = config.selection.mating_pool(&scores, rng);

            // Crossover on consecutive pairs; an odd tail passes through
            let mut next_gen: Vec<P::Genome> = Vec::with_capacity(population.len());
            for pair in pool.chunks(2) {
                if let [a, b] = *pair {
                    let (c1, c2) = problem.crossover(&population[a], &population[b], rng);
                    next_gen.push(c1);
                    next_gen.push(c2);
                } else {
                    next_gen.extend(pair.iter().map(|&a| population[a].clone()));
                }
            }

            // Mutation
            for child in next_gen.iter_mut() {
                if rng.random::<f64>() < config.mutation_rate {
                    problem.mutate(child, rng);
                }
            }

            for child in &next_gen {
                problem.check(child)?;
            }

            // Elitism: this generation's best survives in slot 0
            next_gen[0] = population[best_idx].clone();
            population = next_gen;
        }

        // 3. Final evaluation
        let fitness = evaluate_population(problem, &population, config.parallel)?;
        let best_idx = best_index(&fitness);
        let best_fitness = fitness[best_idx];

        tracing::debug!(
            best_fitness = best_fitness.to_f64(),
            generations = config.generations,
            "GA run finished"
        );

        Ok(GaResult {
            best: population.swap_remove(best_idx),
            best_fitness,
            generations: config.generations,
            trace,
        })
    }
}

/// Evaluate all genomes, keeping population order.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &[P::Genome],
    parallel: bool,
) -> Result<Vec<P::Fitness>> {
    if parallel {
        population.par_iter().map(|g| problem.evaluate(g)).collect()
    } else {
        population.iter().map(|g| problem.evaluate(g)).collect()
    }
}

/// Evaluate all genomes, keeping population order.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &[P::Genome],
    _parallel: bool,
) -> Result<Vec<P::Fitness>> {
    population.iter().map(|g| problem.evaluate(g)).collect()
}

/// Index of the highest fitness; the first one wins ties.
fn best_index<F: Fitness>(fitness: &[F]) -> usize {
    let mut best = 0;
    for (i, f) in fitness.iter().enumerate().skip(1) {
        if *f > fitness[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
