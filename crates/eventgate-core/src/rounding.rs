/// Rounds `value` to `places` decimal places, ties to even.
///
/// Ties are judged on the exact binary value of the double, so `1.0005`
/// (stored just below the midpoint) rounds down to `1.0` while `0.0625`
/// (an exact midpoint) rounds to the even `0.062`. The result is the double
/// nearest to the rounded decimal.
pub fn round_half_even(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Fixed-precision formatting is exact and rounds ties to even.
    format!("{value:.places$}").parse().unwrap_or(value)
}
