//! Monte-Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random blocked sites on a fresh grid until
//! it percolates and records the opened fraction. Over many trials the
//! recorded fractions estimate the threshold for that grid size.

use rand::Rng;
use serde::Serialize;

use crate::error::PercolationError;
use crate::grid::PercolationGrid;
use crate::rng::SimRng;
use crate::stats;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// z-score for a 95% confidence interval.
const CONFIDENCE_Z: f64 = 1.96;

// ---------------------------------------------------------------------------
// Experiment
// ---------------------------------------------------------------------------

/// A completed run of `trials` independent percolation trials on n×n
/// grids.
///
/// [`Experiment::run`] is the only constructor, so every accessor sees a
/// fully recorded sample sequence. The statistics are recomputed from the
/// samples on each call rather than cached.
#[derive(Clone, Debug)]
pub struct Experiment {
    grid_size: usize,
    trials: usize,
    samples: Vec<f64>,
}

/// Serializable snapshot of an experiment's results.
#[derive(Clone, Debug, Serialize)]
pub struct ExperimentSummary {
    pub grid_size: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,
}

impl Experiment {
    /// Runs `trials` independent trials on n×n grids, drawing all
    /// randomness from `rng`.
    pub fn run(n: usize, trials: usize, rng: &mut SimRng) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::GridSize { n });
        }
        if trials == 0 {
            return Err(PercolationError::TrialCount { trials });
        }
        let mut samples = Vec::with_capacity(trials);
        for _ in 0..trials {
            samples.push(Self::single_trial(n, rng)?);
        }
        Ok(Self {
            grid_size: n,
            trials,
            samples,
        })
    }

    /// One trial: open random blocked sites until the grid percolates,
    /// then return the opened fraction.
    ///
    /// Terminates almost surely: opening is monotonic and a fully open
    /// grid always percolates.
    fn single_trial(n: usize, rng: &mut SimRng) -> Result<f64, PercolationError> {
        let mut grid = PercolationGrid::new(n)?;
        while !grid.percolates() {
            let row = rng.0.gen_range(1..=n);
            let col = rng.0.gen_range(1..=n);
            if !grid.is_open(row, col)? {
                grid.open(row, col)?;
            }
        }
        Ok(grid.open_sites() as f64 / (n * n) as f64)
    }

    /// Grid side length the trials ran on.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of recorded trials.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// The recorded threshold samples, one per trial, in trial order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample mean of the recorded thresholds.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.samples)
    }

    /// Sample standard deviation of the recorded thresholds. `NaN` when
    /// only one trial was run.
    pub fn stddev(&self) -> f64 {
        stats::sample_stddev(&self.samples)
    }

    fn confidence_half_width(&self) -> f64 {
        CONFIDENCE_Z * self.stddev() / (self.trials as f64).sqrt()
    }

    /// Lower bound of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.confidence_half_width()
    }

    /// Upper bound of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.confidence_half_width()
    }

    /// Snapshot of all derived statistics, for machine-readable output.
    pub fn summary(&self) -> ExperimentSummary {
        ExperimentSummary {
            grid_size: self.grid_size,
            trials: self.trials,
            mean: self.mean(),
            stddev: self.stddev(),
            confidence_lo: self.confidence_lo(),
            confidence_hi: self.confidence_hi(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_grid_size() {
        let mut rng = SimRng::from_seed_u64(0);
        assert_eq!(
            Experiment::run(0, 10, &mut rng).unwrap_err(),
            PercolationError::GridSize { n: 0 }
        );
    }

    #[test]
    fn test_rejects_zero_trials() {
        let mut rng = SimRng::from_seed_u64(0);
        assert_eq!(
            Experiment::run(5, 0, &mut rng).unwrap_err(),
            PercolationError::TrialCount { trials: 0 }
        );
    }

    #[test]
    fn test_records_one_sample_per_trial() {
        let mut rng = SimRng::from_seed_u64(3);
        let experiment = Experiment::run(4, 12, &mut rng).unwrap();
        assert_eq!(experiment.trials(), 12);
        assert_eq!(experiment.grid_size(), 4);
        assert_eq!(experiment.samples().len(), 12);
        for &sample in experiment.samples() {
            assert!(sample > 0.0 && sample <= 1.0, "sample {sample} out of (0, 1]");
        }
    }

    #[test]
    fn test_single_trial_stddev_is_nan() {
        let mut rng = SimRng::from_seed_u64(3);
        let experiment = Experiment::run(4, 1, &mut rng).unwrap();
        assert!(experiment.stddev().is_nan());
        assert!(experiment.mean() > 0.0);
    }
}
