use num_traits::Zero;

pub fn vec_sum(v: (isize, isize), u: (isize, isize)) -> (isize, isize) {
    (v.0 + u.0, v.1 + u.1)
}
pub fn vec_subtract(v: (f64, f64), u: (f64, f64)) -> (f64, f64) {
    (v.0 - u.0, v.1 - u.1)
}
/// Squared length. Circle tests compare against squared radii, never taking a root.
pub fn vec_squared_module(v: (f64, f64)) -> f64 {
    v.0 * v.0 + v.1 * v.1
}
pub fn squared_distance(p: (f64, f64), q: (f64, f64)) -> f64 {
    vec_squared_module(vec_subtract(p, q))
}
/// Point of a grid cell, as used by the distance tests.
pub fn cell_point(row: isize, column: isize) -> (f64, f64) {
    (row as f64, column as f64)
}
pub fn is_degenerate_span(min: f64, max: f64) -> bool {
    (max - min).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance_is_symmetric() {
        assert_eq!(squared_distance((1.0, 2.0), (4.0, 6.0)), 25.0);
        assert_eq!(squared_distance((4.0, 6.0), (1.0, 2.0)), 25.0);
    }

    #[test]
    fn zero_span_is_degenerate() {
        assert!(is_degenerate_span(3.5, 3.5));
        assert!(!is_degenerate_span(3.5, 3.6));
    }
}
