use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError
{
    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(i32),
    #[error("trial count must be positive, got {0}")]
    InvalidTrialCount(i32),
    #[error("site ({row}, {col}) is outside the {size}x{size} grid (coordinates are 1-based)")]
    OutOfRange { row: i32, col: i32, size: i32 },
}
