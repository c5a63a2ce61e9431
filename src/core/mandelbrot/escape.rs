use crate::core::data::complex::Complex;

/// Iterates `z_(n+1) = z_n² + c` from `z_1 = 0` until the modulus of `z`
/// exceeds 2 or `max_iterations` is reached, returning the iteration count.
///
/// The loop is do-while shaped: at least one iteration always runs, so the
/// result is in `[1, max_iterations]`. A point whose modulus is exactly 2
/// keeps iterating (the escape test is strictly greater). Hitting the cap and
/// escaping on the final iteration both return `max_iterations`; the method
/// does not distinguish them.
///
/// Escape is tested on the squared magnitude against 4, which yields the same
/// count as comparing `sqrt(x² + y²)` against 2 without a square root per
/// iteration.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut n = 0;

    loop {
        n += 1;
        z = z * z + c;

        if z.magnitude_squared() > 4.0 || n >= max_iterations {
            return n;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(point(0.0, 0.0), 256), 256);
        assert_eq!(escape_time(point(0.0, 0.0), 1024), 1024);
    }

    #[test]
    fn test_far_point_escapes_on_first_iteration() {
        // z_1 = c = (3, 0), modulus 3 > 2
        assert_eq!(escape_time(point(3.0, 0.0), 256), 1);
        assert_eq!(escape_time(point(0.0, -5.0), 256), 1);
    }

    #[test]
    fn test_modulus_exactly_two_keeps_iterating() {
        // z_1 = (2, 0) has modulus exactly 2, which does not satisfy the
        // strict > 2 escape test; z_2 = (6, 0) escapes.
        assert_eq!(escape_time(point(2.0, 0.0), 256), 2);
    }

    #[test]
    fn test_interior_point_reaches_cap() {
        // -1 is in the period-2 bulb: the orbit cycles 0, -1, 0, -1, ...
        assert_eq!(escape_time(point(-1.0, 0.0), 512), 512);
    }

    #[test]
    fn test_result_is_at_least_one_even_for_tiny_cap() {
        assert_eq!(escape_time(point(0.0, 0.0), 1), 1);
        assert_eq!(escape_time(point(3.0, 0.0), 1), 1);
    }

    #[test]
    fn test_result_is_within_bounds() {
        for &(x, y) in &[(-1.8, 0.0), (-0.5, 0.6), (0.3, 0.3), (0.0, 1.0)] {
            let n = escape_time(point(x, y), 256);
            assert!((1..=256).contains(&n), "escape_time({}, {}) = {}", x, y, n);
        }
    }

    #[test]
    fn test_deterministic() {
        let c = point(-0.7435, 0.1314);

        assert_eq!(escape_time(c, 2048), escape_time(c, 2048));
    }
}
