//! Mutation-rate sweeps.
//!
//! Runs the same problem once per mutation rate, keeping every other
//! parameter (including the seed) fixed, and tabulates the outcomes.

use crate::error::Result;
use crate::ga::{Fitness, GaConfig, GaProblem, GaRunner};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

/// Outcome of one run in a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepOutcome {
    /// Mutation rate used for the run.
    pub mutation_rate: f64,
    /// Best fitness of the final evaluation.
    pub best_fitness: f64,
    /// Best fitness recorded in the last generation, if any ran.
    pub last_generation_best: Option<f64>,
}

/// Runs `problem` once per entry of `rates`.
///
/// Each run uses `base` with only the mutation rate replaced. The first
/// failing run aborts the sweep.
pub fn sweep_mutation_rates<P: GaProblem>(
    problem: &P,
    base: &GaConfig,
    rates: &[f64],
) -> Result<Vec<SweepOutcome>> {
    rates
        .iter()
        .map(|&rate| {
            let config = base.clone().with_mutation_rate(rate);
            let result = GaRunner::run(problem, &config)?;
            tracing::debug!(rate, best = result.best_fitness.to_f64(), "sweep run finished");
            Ok(SweepOutcome {
                mutation_rate: rate,
                best_fitness: result.best_fitness.to_f64(),
                last_generation_best: result.trace.last_best(),
            })
        })
        .collect()
}

/// Tabulates sweep outcomes, one row per mutation rate.
pub fn render_sweep(outcomes: &[SweepOutcome]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(vec!["Mutation rate", "Best fitness", "Last generation best"]);

    for o in outcomes {
        table.add_row(vec![
            Cell::new(format!("{:.2}", o.mutation_rate)),
            Cell::new(format!("{:.4}", o.best_fitness)).set_alignment(CellAlignment::Right),
            Cell::new(
                o.last_generation_best
                    .map_or_else(|| "-".to_string(), |v| format!("{v:.4}")),
            )
            .set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}
