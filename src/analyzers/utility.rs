/// Computes the arithmetic mean of the values. Returns `None` for empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Reads a cell as a finite number. Empty and non-numeric text gives `None`.
pub fn coerce_number(value: Option<&str>) -> Option<f64> {
    value?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses a `<width>x<height>` resolution into its pixel count.
///
/// Both sides must be unsigned integers; anything else, or a product that
/// does not fit in a `u64`, gives `None`.
pub fn resolution_pixels(value: Option<&str>) -> Option<u64> {
    let (width, height) = value?.split_once('x')?;
    if height.contains('x') {
        return None;
    }
    let width: u64 = width.trim().parse().ok()?;
    let height: u64 = height.trim().parse().ok()?;
    width.checked_mul(height)
}
