//! Site-percolation simulation core.
//!
//! An n×n grid of sites starts fully blocked. Sites are opened one at a
//! time; the grid *percolates* once a path of open sites connects the top
//! row to the bottom row. Opening uniformly random sites until percolation
//! and recording the opened fraction gives one sample of the percolation
//! threshold; [`Experiment`] repeats that over many trials and reports the
//! sample mean, standard deviation, and a 95% confidence interval.
//!
//! Connectivity is answered by two weighted quick-union structures with
//! virtual top/bottom nodes ([`PercolationGrid`]); the second structure
//! exists solely to keep full-site queries free of backwash.

pub mod disjoint_set;
pub mod error;
pub mod experiment;
pub mod grid;
pub mod rng;
pub mod stats;

pub use disjoint_set::DisjointSet;
pub use error::PercolationError;
pub use experiment::{Experiment, ExperimentSummary};
pub use grid::PercolationGrid;
pub use rng::SimRng;

#[cfg(test)]
mod integration_tests;
