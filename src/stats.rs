//! Reducers over a sequence of floating-point samples.
//!
//! The variance uses Welford's online update to avoid the cancellation of
//! the naive `E[X²] − E[X]²` form.

use num_traits::Float;

/// Arithmetic mean. `None` for an empty slice.
pub fn mean<T>(data: &[T]) -> Option<T> where T: Float
{
    if data.is_empty()
    {
        return None;
    }
    let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
    Some(sum / T::from(data.len())?)
}

/// Sample variance with divisor `n - 1`. `None` for fewer than two samples.
pub fn variance<T>(data: &[T]) -> Option<T> where T: Float
{
    if data.len() < 2
    {
        return None;
    }
    let mut count = T::zero();
    let mut avg   = T::zero();
    let mut m2    = T::zero();
    for &x in data
    {
        count     = count + T::one();
        let delta = x - avg;
        avg       = avg + delta / count;
        m2        = m2 + delta * (x - avg);
    }
    Some(m2 / (count - T::one()))
}

/// Sample standard deviation, `sqrt(variance)`.
pub fn std_dev<T>(data: &[T]) -> Option<T> where T: Float
{
    variance(data).map(|v| v.sqrt())
}
