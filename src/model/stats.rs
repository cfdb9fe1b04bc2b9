/// Two-decimal rounding with ties to even on the scaled value.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Truncates toward zero, then clamps into `[lo, hi]`.
pub fn truncate_clamp(x: f64, lo: i64, hi: i64) -> i64 {
    (x.trunc() as i64).clamp(lo, hi)
}

/// Sample standard deviation (n - 1 denominator); NaN for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let mut ss = 0.0;
    for &v in values {
        let d = v - mean;
        ss += d * d;
    }
    (ss / (n - 1) as f64).sqrt()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/stats.rs"]
mod tests;
