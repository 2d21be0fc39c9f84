//! Per-generation statistics and progress reporting.
//!
//! The runner records every generation into a [`ConvergenceTrace`] and
//! forwards a [`GenerationStats`] snapshot to a [`Reporter`] at the configured
//! cadence. Reporters only observe; they cannot influence the run.

/// Snapshot of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Highest fitness in the generation.
    pub best_fitness: f64,
    /// Mean fitness of the generation.
    pub average_fitness: f64,
}

/// Best and average fitness per generation, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceTrace {
    best: Vec<f64>,
    average: Vec<f64>,
}

impl ConvergenceTrace {
    /// Creates an empty trace with room for `generations` entries.
    pub fn with_capacity(generations: usize) -> Self {
        Self {
            best: Vec::with_capacity(generations),
            average: Vec::with_capacity(generations),
        }
    }

    /// Appends one generation.
    pub fn push(&mut self, best: f64, average: f64) {
        self.best.push(best);
        self.average.push(average);
    }

    /// Best fitness per generation.
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// Average fitness per generation.
    pub fn average(&self) -> &[f64] {
        &self.average
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Returns `true` if no generation was recorded.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Best fitness of the last recorded generation.
    pub fn last_best(&self) -> Option<f64> {
        self.best.last().copied()
    }

    /// Iterates `(best, average)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.best.iter().copied().zip(self.average.iter().copied())
    }
}

/// Receives progress snapshots during a run.
///
/// Closures taking `&GenerationStats` implement this trait.
pub trait Reporter {
    /// Called for every generation selected by the reporting cadence.
    fn report(&mut self, stats: &GenerationStats);
}

impl<F: FnMut(&GenerationStats)> Reporter for F {
    fn report(&mut self, stats: &GenerationStats) {
        self(stats)
    }
}

/// Discards all reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReport;

impl Reporter for NoReport {
    fn report(&mut self, _stats: &GenerationStats) {}
}

/// Emits each report as a `tracing` info event.
#[derive(Debug, Clone)]
pub struct TracingReporter {
    label: String,
}

impl TracingReporter {
    /// Creates a reporter tagging its events with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Reporter for TracingReporter {
    fn report(&mut self, stats: &GenerationStats) {
        tracing::info!(
            run = %self.label,
            generation = stats.generation,
            best = stats.best_fitness,
            average = stats.average_fitness,
            "generation {}: best fitness = {:.4}",
            stats.generation,
            stats.best_fitness
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_push_and_read() {
        let mut trace = ConvergenceTrace::with_capacity(2);
        assert!(trace.is_empty());
        assert_eq!(trace.last_best(), None);

        trace.push(3.0, 1.5);
        trace.push(4.0, 2.5);

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.best(), &[3.0, 4.0]);
        assert_eq!(trace.average(), &[1.5, 2.5]);
        assert_eq!(trace.last_best(), Some(4.0));
        assert_eq!(trace.iter().collect::<Vec<_>>(), vec![(3.0, 1.5), (4.0, 2.5)]);
    }

    #[test]
    fn test_closure_reporter() {
        let mut seen = Vec::new();
        {
            let mut reporter = |s: &GenerationStats| seen.push(s.generation);
            let stats = GenerationStats {
                generation: 7,
                best_fitness: 1.0,
                average_fitness: 0.5,
            };
            reporter.report(&stats);
        }
        assert_eq!(seen, vec![7]);
    }

    #[test]
    fn test_tracing_reporter_does_not_panic_without_subscriber() {
        let mut reporter = TracingReporter::new("test");
        reporter.report(&GenerationStats {
            generation: 0,
            best_fitness: 2.0,
            average_fitness: 1.0,
        });
    }
}
