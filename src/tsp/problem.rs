//! Permutation genome model for the symmetric TSP.

use super::types::Point;
use crate::error::{Error, Result};
use crate::ga::operators::{is_permutation, order_crossover, swap_mutation};
use crate::ga::GaProblem;
use crate::random::shuffle;
use rand::Rng;

/// A closed-tour TSP instance.
///
/// Genomes are permutations of city indices; fitness is the inverse of the
/// tour length (last city connects back to the first).
///
/// # Examples
///
/// ```
/// use u_evolve::tsp::{Point, TspProblem};
///
/// let square = TspProblem::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ]).unwrap();
/// assert!((square.route_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct TspProblem {
    cities: Vec<Point>,
}

impl TspProblem {
    /// Creates an instance from city coordinates.
    ///
    /// Requires at least two cities with finite coordinates.
    pub fn new(cities: Vec<Point>) -> Result<Self> {
        if cities.len() < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "a tour needs at least 2 cities, got {}",
                cities.len()
            )));
        }
        if let Some(i) = cities.iter().position(|c| !c.is_finite()) {
            return Err(Error::InvalidConfiguration(format!(
                "city {i} has non-finite coordinates"
            )));
        }
        Ok(Self { cities })
    }

    /// Creates `n` cities uniformly distributed in the unit square.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        let cities = (0..n)
            .map(|_| Point::new(rng.random::<f64>(), rng.random::<f64>()))
            .collect();
        Self::new(cities)
    }

    /// City coordinates, indexed by genome values.
    pub fn cities(&self) -> &[Point] {
        &self.cities
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`; an instance holds at least two cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Length of the closed tour visiting `route` in order.
    ///
    /// # Panics
    /// Panics if `route` contains an index out of range.
    pub fn route_length(&self, route: &[usize]) -> f64 {
        let n = route.len();
        (0..n)
            .map(|i| self.cities[route[i]].distance_to(&self.cities[route[(i + 1) % n]]))
            .sum()
    }

    /// Inverse tour length.
    ///
    /// A zero-length tour (every city coincident) is a modeling error and
    /// yields [`Error::DegenerateFitness`].
    pub fn route_fitness(&self, route: &[usize]) -> Result<f64> {
        let length = self.route_length(route);
        if length > 0.0 {
            Ok(1.0 / length)
        } else {
            Err(Error::DegenerateFitness(format!(
                "tour {route:?} has zero length"
            )))
        }
    }
}

impl GaProblem for TspProblem {
    type Genome = Vec<usize>;
    type Fitness = f64;

    fn create_genome<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut route: Vec<usize> = (0..self.cities.len()).collect();
        shuffle(&mut route, rng);
        route
    }

    fn evaluate(&self, route: &Vec<usize>) -> Result<f64> {
        self.route_fitness(route)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Vec<usize>,
        parent2: &Vec<usize>,
        rng: &mut R,
    ) -> (Vec<usize>, Vec<usize>) {
        let child1 = order_crossover(parent1, parent2, rng);
        let child2 = order_crossover(parent2, parent1, rng);
        (child1, child2)
    }

    fn mutate<R: Rng>(&self, route: &mut Vec<usize>, rng: &mut R) {
        swap_mutation(route, rng);
    }

    fn check(&self, route: &Vec<usize>) -> Result<()> {
        if is_permutation(route, self.cities.len()) {
            Ok(())
        } else {
            Err(Error::InvalidGenome(format!(
                "{route:?} is not a permutation of 0..{}",
                self.cities.len()
            )))
        }
    }
}
