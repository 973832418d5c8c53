/// Arithmetic mean of pixel samples
///
/// NaN samples are skipped. Returns `None` when no other sample remains.
pub fn average_intensity(samples: &[f64]) -> Option<f64> {
    let (sum, count) = samples
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
