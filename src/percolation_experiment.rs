use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::PercolationError;
use crate::percolation_grid::PercolationGrid;
use crate::threshold_statistics::ThresholdStatistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig
{
    pub grid_size: i32,
    pub trials: i32,
    /// Master seed from which every trial's generator seed is drawn. `None` seeds every trial from the OS.
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl ExperimentConfig
{
    pub fn new(grid_size: i32, trials: i32) -> Self
    {
        Self { grid_size, trials, seed: None, parallel: true }
    }
    pub fn validate(&self) -> Result<(), PercolationError>
    {
        if self.grid_size <= 0
        {
            return Err(PercolationError::InvalidGridSize(self.grid_size));
        }
        if self.trials <= 0
        {
            return Err(PercolationError::InvalidTrialCount(self.trials));
        }
        Ok(())
    }
}

/// Opens uniformly drawn sites of a fresh grid until it percolates and returns
/// the fraction of sites that were open at that point.
///
/// Draws that land on an already open site are skipped without being counted.
pub fn run_trial<R>(grid_size: i32, rng: &mut R) -> Result<f64, PercolationError> where R: Rng
{
    let mut grid   = PercolationGrid::new(grid_size)?;
    let mut opened = 0_usize;
    while !grid.percolates()
    {
        let row = rng.random_range(1..=grid_size);
        let col = rng.random_range(1..=grid_size);
        if !grid.is_open(row, col)?
        {
            grid.open(row, col)?;
            opened += 1;
        }
    }
    trace!("grid at percolation after {opened} opens, {} clusters:\n{grid}", grid.cluster_count());

    let num_sites = grid_size as usize * grid_size as usize;
    Ok(opened as f64 / num_sites as f64)
}

// Drawn up front so a trial's seed does not depend on which thread runs it.
fn trial_seeds(seed: Option<u64>, trials: usize) -> Vec<Option<u64>>
{
    match seed
    {
        Some(seed) =>
        {
            let mut master = SmallRng::seed_from_u64(seed);
            (0..trials).map(|_| Some(master.random())).collect()
        }
        None => vec![None; trials],
    }
}

fn trial_rng(seed: Option<u64>) -> SmallRng
{
    match seed
    {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None       => SmallRng::from_os_rng(),
    }
}

/// Monte Carlo estimate of the percolation threshold of an N-by-N grid.
///
/// All trials run when the experiment is built; the summary methods only read
/// the stored samples.
#[derive(Debug, Clone)]
pub struct PercolationExperiment
{
    grid_size: i32,
    statistics: ThresholdStatistics<f64>,
}

impl PercolationExperiment
{
    /// Runs `trials` OS-seeded trials on `grid_size`-by-`grid_size` grids in parallel.
    pub fn new(grid_size: i32, trials: i32) -> Result<Self, PercolationError>
    {
        Self::from_config(&ExperimentConfig::new(grid_size, trials))
    }
    /// Same as [`PercolationExperiment::new`] but reproducible for a given `seed`.
    pub fn with_seed(grid_size: i32, trials: i32, seed: u64) -> Result<Self, PercolationError>
    {
        let config = ExperimentConfig { seed: Some(seed), ..ExperimentConfig::new(grid_size, trials) };
        Self::from_config(&config)
    }
    pub fn from_config(config: &ExperimentConfig) -> Result<Self, PercolationError>
    {
        config.validate()?;

        let trials      = config.trials as usize;
        let seeds       = trial_seeds(config.seed, trials);
        let mut samples = vec![0_f64; trials];

        let perform_trial = |(&seed, sample): (&Option<u64>, &mut f64)| -> Result<(), PercolationError>
        {
            let mut rng = trial_rng(seed);
            *sample     = run_trial(config.grid_size, &mut rng)?;
            debug!("trial seed {seed:?}: threshold {sample}");
            Ok(())
        };
        if config.parallel
        {
            (&seeds, &mut samples).into_par_iter().try_for_each(perform_trial)?;
        }
        else
        {
            std::iter::zip(&seeds, &mut samples).try_for_each(perform_trial)?;
        }

        Ok(Self { grid_size: config.grid_size, statistics: ThresholdStatistics::new(samples) })
    }
    pub fn grid_size(&self) -> i32
    {
        self.grid_size
    }
    pub fn trials(&self) -> usize
    {
        self.statistics.trials()
    }
    pub fn samples(&self) -> &[f64]
    {
        self.statistics.samples()
    }
    pub fn statistics(&self) -> &ThresholdStatistics<f64>
    {
        &self.statistics
    }
    pub fn mean(&self) -> f64
    {
        self.statistics.mean()
    }
    /// Sample standard deviation; NaN for a single trial.
    pub fn stddev(&self) -> f64
    {
        self.statistics.stddev()
    }
    pub fn confidence_lo(&self) -> f64
    {
        self.statistics.confidence_lo()
    }
    pub fn confidence_hi(&self) -> f64
    {
        self.statistics.confidence_hi()
    }
}
