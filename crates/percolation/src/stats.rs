//! Descriptive statistics over a recorded sample sequence.
//!
//! Degenerate inputs follow the mathematical definitions: the mean of an
//! empty slice and the sample deviation of fewer than two samples are
//! `NaN`, not silently substituted values.

/// Arithmetic mean.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample variance, with the `n - 1` denominator.
pub fn sample_variance(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    let sum_sq: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
    sum_sq / (xs.len() - 1) as f64
}

/// Sample standard deviation.
pub fn sample_stddev(xs: &[f64]) -> f64 {
    sample_variance(xs).sqrt()
}
