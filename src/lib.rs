//! Site percolation on an N-by-N grid.
//!
//! [`PercolationGrid`] answers `percolates`/`is_full` after every opened site by
//! keeping two virtual sites (top and bottom) in a union-find over the grid.
//! [`PercolationExperiment`] opens random sites until the grid percolates, T times,
//! and summarises the open fractions as an estimate of the percolation threshold.

pub mod equivalence_class;
pub mod error;
pub mod parameter_reader;
pub mod percolation_experiment;
pub mod percolation_grid;
pub mod stats;
pub mod threshold_statistics;

pub use equivalence_class::EquivalenceClass;
pub use error::PercolationError;
pub use percolation_experiment::{run_trial, ExperimentConfig, PercolationExperiment};
pub use percolation_grid::PercolationGrid;
pub use threshold_statistics::ThresholdStatistics;
