use num_traits::Float;
use std::io::Write;

use crate::stats;

/// z-value of the two-sided 95% normal confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Percolation threshold samples, one per trial, and their summary.
///
/// The spread is undefined for a single trial: `stddev` and both confidence
/// bounds are then NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdStatistics<T> where T: Float
{
    samples: Vec<T>,
}

impl<T> ThresholdStatistics<T> where T: Float + std::fmt::Display
{
    pub fn new(samples: Vec<T>) -> Self
    {
        Self { samples }
    }
    pub fn samples(&self) -> &[T]
    {
        &self.samples
    }
    pub fn trials(&self) -> usize
    {
        self.samples.len()
    }
    pub fn mean(&self) -> T
    {
        stats::mean(&self.samples).unwrap_or_else(T::nan)
    }
    pub fn stddev(&self) -> T
    {
        stats::std_dev(&self.samples).unwrap_or_else(T::nan)
    }
    fn half_width(&self) -> T
    {
        let z      = T::from(CONFIDENCE_95).unwrap_or_else(T::nan);
        let trials = T::from(self.trials()).unwrap_or_else(T::nan);
        z * self.stddev() / trials.sqrt()
    }
    pub fn confidence_lo(&self) -> T
    {
        self.mean() - self.half_width()
    }
    pub fn confidence_hi(&self) -> T
    {
        self.mean() + self.half_width()
    }
    pub fn write_to_file(&self, file_name: &std::path::Path, grid_size: i32, elapsed_time: std::time::Duration) -> std::io::Result<()>
    {
        if self.samples.iter().any(|s| s.is_nan() || *s <= T::zero() || *s > T::one())
        {
            return Err(std::io::Error::other("Threshold samples should lie in (0, 1]"));
        }

        let mut file = std::io::BufWriter::new(std::fs::File::create(file_name)?);
        writeln!(&mut file, "trial, threshold, grid_size: {grid_size}, elapsed_time: {}", elapsed_time.as_secs_f64())?;
        for (trial, threshold) in self.samples.iter().enumerate()
        {
            writeln!(&mut file, "{trial}, {threshold}")?;
        }
        file.flush()
    }
}
