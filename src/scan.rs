//! Brute-force maximum search over a sampled interval.
//!
//! Evaluates a function on an evenly spaced grid and keeps the best sample.
//! Useful as a baseline against which the GA can be compared on
//! one-dimensional problems.

use crate::error::{Error, Result};

/// A sampled point `(x, f(x))`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanPoint {
    pub x: f64,
    pub y: f64,
}

/// `samples` evenly spaced values from `lo` to `hi`, both ends included.
///
/// # Examples
///
/// ```
/// use u_evolve::scan::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
/// ```
pub fn linspace(lo: f64, hi: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![lo],
        n => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}

/// Samples `f` on `linspace(lo, hi, samples)` and returns the first point with
/// the largest value.
///
/// Requires finite bounds with `lo < hi` and at least 2 samples.
pub fn grid_maximum<F: Fn(f64) -> f64>(f: F, lo: f64, hi: f64, samples: usize) -> Result<ScanPoint> {
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(Error::InvalidConfiguration(format!(
            "scan interval [{lo}, {hi}] must be finite and non-empty"
        )));
    }
    if samples < 2 {
        return Err(Error::InvalidConfiguration(format!(
            "scan needs at least 2 samples, got {samples}"
        )));
    }

    let mut best = ScanPoint {
        x: lo,
        y: f64::NEG_INFINITY,
    };
    for x in linspace(lo, hi, samples) {
        let y = f(x);
        if y > best.y {
            best = ScanPoint { x, y };
        }
    }
    Ok(best)
}

/// Samples `f` on the grid and returns every point, for plotting.
pub fn sample_curve<F: Fn(f64) -> f64>(f: F, lo: f64, hi: f64, samples: usize) -> Vec<ScanPoint> {
    linspace(lo, hi, samples)
        .into_iter()
        .map(|x| ScanPoint { x, y: f(x) })
        .collect()
}
