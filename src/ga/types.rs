//! Core trait definitions for the GA framework.
//!
//! [`GaProblem`] is the contract between the generic evolutionary loop and a
//! genome model: how to create, score, recombine, mutate and validate
//! genomes. [`Fitness`] abstracts over the scalar score type.

use crate::error::Result;
use rand::Rng;

/// Scalar fitness value.
///
/// Fitness must support comparison and be cheaply copyable.
/// **Higher fitness is better** (maximization).
///
/// Built-in implementations exist for `f64` (tours) and `i64` (timetables).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for statistics and selection weights.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Defines a genome model for the GA.
///
/// Implementors plug their representation into the generic loop:
///
/// 1. **Initialization**: [`create_genome`](GaProblem::create_genome)
/// 2. **Evaluation**: [`evaluate`](GaProblem::evaluate)
/// 3. **Crossover**: [`crossover`](GaProblem::crossover)
/// 4. **Mutation**: [`mutate`](GaProblem::mutate)
/// 5. **Validation**: [`check`](GaProblem::check)
///
/// Every stochastic method receives the run's RNG; implementations must
/// not use any other source of randomness.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// genomes in parallel (feature `parallel`).
pub trait GaProblem: Send + Sync {
    /// The encoded candidate solution.
    type Genome: Clone + Send + Sync + std::fmt::Debug;

    /// The score type. Higher is better.
    type Fitness: Fitness;

    /// Creates a random, structurally valid genome.
    fn create_genome<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Scores a genome. Must be a pure function of the genome.
    fn evaluate(&self, genome: &Self::Genome) -> Result<Self::Fitness>;

    /// Recombines two parents into two children.
    ///
    /// The default implementation returns clones of the parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Genome,
        parent2: &Self::Genome,
        _rng: &mut R,
    ) -> (Self::Genome, Self::Genome) {
        (parent1.clone(), parent2.clone())
    }

    /// Mutates a genome in place. The runner decides *whether* to mutate;
    /// this method always applies the perturbation.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _genome: &mut Self::Genome, _rng: &mut R) {}

    /// Verifies the model's structural invariant.
    ///
    /// The runner calls this on every offspring and aborts the run with
    /// [`Error::InvalidGenome`](crate::error::Error::InvalidGenome) on failure.
    fn check(&self, _genome: &Self::Genome) -> Result<()> {
        Ok(())
    }
}
