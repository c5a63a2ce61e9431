/// Returns `intervals + 1` evenly spaced values covering `[min, max]`
/// inclusive at both ends.
///
/// The first value is exactly `min`; the last is `min + intervals * delta`,
/// which can differ from `max` by one rounding step of the multiplication.
/// `intervals == 0` yields the single-point sequence `[min]`, the degenerate
/// case a one-sample axis produces (a naive `(max - min) / 0` would poison the
/// whole sequence with NaN).
#[must_use]
pub fn equal_range(min: f64, max: f64, intervals: u32) -> Vec<f64> {
    if intervals == 0 {
        return vec![min];
    }

    let delta = (max - min) / f64::from(intervals);
    (0..=intervals).map(|i| min + f64::from(i) * delta).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_returns_intervals_plus_one_points() {
        let points = equal_range(0.0, 1.0, 10);

        assert_eq!(points.len(), 11);
    }

    #[test]
    fn test_first_point_is_exactly_min() {
        let points = equal_range(-2.37, 1.0, 7);

        assert_eq!(points[0], -2.37);
    }

    #[test]
    fn test_last_point_reaches_max_within_tolerance() {
        let points = equal_range(-2.0, 1.0, 300);

        assert!((points[300] - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_spacing_is_constant() {
        let points = equal_range(-1.5, 0.5, 40);
        let delta = (0.5 - (-1.5)) / 40.0;

        for pair in points.windows(2) {
            assert!((pair[1] - pair[0] - delta).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_single_interval_gives_both_endpoints() {
        let points = equal_range(-1.0, 1.0, 1);

        assert_eq!(points, vec![-1.0, 1.0]);
    }

    #[test]
    fn test_zero_intervals_gives_single_point() {
        let points = equal_range(0.25, 9.0, 0);

        assert_eq!(points, vec![0.25]);
    }

    #[test]
    fn test_descending_range() {
        let points = equal_range(1.0, -1.0, 2);

        assert_eq!(points, vec![1.0, 0.0, -1.0]);
    }
}
