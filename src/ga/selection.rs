//! Selection strategies for the GA.
//!
//! Selection builds the mating pool: `population_size` indices into the
//! current population, consumed pairwise by crossover.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::seq::index;
use rand::Rng;

/// Selection strategy for building the mating pool.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: draw `k` distinct individuals, keep the fittest.
    ///
    /// Sampling is without replacement inside one tournament and with
    /// replacement across tournaments. `k` larger than the population is
    /// reduced to the population size.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection, with replacement.
    ///
    /// Negative fitness values get zero weight. When the weights sum to zero
    /// the pool is the unchanged population.
    ///
    /// # Complexity
    /// O(n) to build the wheel, O(log n) per selection
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Builds a mating pool of `fitness.len()` indices.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn mating_pool<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> Vec<usize> {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match self {
            Selection::Tournament(k) => (0..fitness.len())
                .map(|_| tournament(fitness, *k, rng))
                .collect(),
            Selection::Roulette => roulette(fitness, rng),
        }
    }
}

/// One tournament: sample `k` distinct contenders, return the fittest.
///
/// Ties go to the contender drawn first.
fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    let n = fitness.len();
    let k = k.clamp(1, n);

    let contenders = index::sample(rng, n, k);
    let mut best = contenders.index(0);
    for idx in contenders.iter().skip(1) {
        if fitness[idx] > fitness[best] {
            best = idx;
        }
    }
    best
}

/// Roulette wheel over the whole population.
fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> Vec<usize> {
    let n = fitness.len();

    // NaN.max(0.0) is 0.0, so malformed scores simply drop out of the wheel.
    let mut cumulative = Vec::with_capacity(n);
    let mut total = 0.0;
    for &f in fitness {
        total += f.max(0.0);
        cumulative.push(total);
    }

    if !(total > 0.0 && total.is_finite()) {
        return (0..n).collect();
    }

    (0..n)
        .map(|_| {
            let threshold = rng.random::<f64>() * total;
            cumulative
                .partition_point(|&c| c <= threshold)
                .min(n - 1) // floating-point fallback
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_tournament_reproducible_with_seed() {
        let fitness = [1.0, 4.0, 2.0, 3.0];

        let a = Selection::Tournament(3).mating_pool(&fitness, &mut create_rng(42));
        let b = Selection::Tournament(3).mating_pool(&fitness, &mut create_rng(42));

        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tournament_exact_sequence_seed_42() {
        // Regression pin for the rand 0.9 StdRng stream.
        let fitness = [1.0, 4.0, 2.0, 3.0];
        let pool = Selection::Tournament(3).mating_pool(&fitness, &mut create_rng(42));
        assert_eq!(pool, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_tournament_of_three_never_picks_worst() {
        // With 3 distinct contenders out of 4, a fitter rival is always present.
        let fitness = [1.0, 4.0, 2.0, 3.0];
        let mut rng = create_rng(42);

        for _ in 0..500 {
            let pool = Selection::Tournament(3).mating_pool(&fitness, &mut rng);
            assert!(!pool.contains(&0), "worst individual selected: {pool:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let fitness = [1.0, 4.0, 2.0, 3.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..2500 {
            for idx in Selection::Tournament(3).mating_pool(&fitness, &mut rng) {
                counts[idx] += 1;
            }
        }
        // Index 1 wins every tournament it enters (3 of 4 draws).
        assert!(
            counts[1] > counts[2],
            "best should beat below-median: {counts:?}"
        );
        assert!(counts[1] > 6000, "expected ~75% wins for best, got {counts:?}");
    }

    #[test]
    fn test_tournament_size_larger_than_population() {
        let fitness = [2.0, 9.0];
        let mut rng = create_rng(3);
        let pool = Selection::Tournament(3).mating_pool(&fitness, &mut rng);
        assert_eq!(pool, vec![1, 1]);
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..2500 {
            for idx in Selection::Tournament(1).mating_pool(&fitness, &mut rng) {
                counts[idx] += 1;
            }
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_fitter() {
        let fitness = [1.0, 50.0, 100.0, 10.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..2500 {
            for idx in Selection::Roulette.mating_pool(&fitness, &mut rng) {
                counts[idx] += 1;
            }
        }
        assert!(
            counts[2] > counts[0],
            "fitter should be selected more often: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_zero_weight_never_selected() {
        let fitness = [0.0, 3.0, 0.0, 1.0];
        let mut rng = create_rng(9);
        for _ in 0..200 {
            let pool = Selection::Roulette.mating_pool(&fitness, &mut rng);
            assert!(pool.iter().all(|&i| i == 1 || i == 3), "{pool:?}");
        }
    }

    #[test]
    fn test_roulette_all_zero_returns_population() {
        let fitness = [0.0; 5];
        let mut rng = create_rng(42);
        let pool = Selection::Roulette.mating_pool(&fitness, &mut rng);
        assert_eq!(pool, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_individual() {
        let fitness = [5.0];
        let mut rng = create_rng(42);

        assert_eq!(Selection::Tournament(3).mating_pool(&fitness, &mut rng), vec![0]);
        assert_eq!(Selection::Roulette.mating_pool(&fitness, &mut rng), vec![0]);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        Selection::Tournament(3).mating_pool(&[], &mut rng);
    }
}
