//! Helper functions

use nalgebra::{Dim, Matrix};
use nalgebra::storage::RawStorage;

/// Round to 3 decimal places, ties to even.
/// This rounding is applied at fixed points of the pipeline and affects the results.
/// The scaling is done in double precision: in single precision `x * 1000.0` may land
/// exactly on a tie that the value itself does not reach.
#[inline]
pub fn round3(x: f32) -> f32 {
    ((f64::from(x) * 1000.0).round_ties_even() / 1000.0) as f32
}

/// Print vector as `[x, y, z]` with 3 decimals.
pub fn dump_vector(label: &str, v: &[f32]) {
    println!("{}: {}", label, format_vector(v));
}

/// Formats values as `[a, b, c]` with 3 decimals.
pub fn format_vector(v: &[f32]) -> String {
    let items: Vec<String> = v.iter().map(|x| format!("{:.3}", normalize_zero(*x))).collect();
    format!("[{}]", items.join(", "))
}

/// Print matrix row by row, 3 decimals.
pub fn dump_matrix<R: Dim, C: Dim, S: RawStorage<f32, R, C>>(label: &str, m: &Matrix<f32, R, C, S>) {
    println!("{}:", label);
    for r in 0..m.nrows() {
        let mut row_str = String::new();
        for c in 0..m.ncols() {
            row_str.push_str(&format!("{:8.3} ", normalize_zero(m[(r, c)])));
        }
        println!("  [{}]", row_str.trim_end());
    }
}

/// Negative zero prints as "-0.000" otherwise.
fn normalize_zero(x: f32) -> f32 {
    if x == 0.0 { 0.0 } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.8660254), 0.866);
        assert_eq!(round3(-4.371139e-8), 0.0);
        assert_eq!(round3(1.0), 1.0);
        assert_eq!(round3(-0.70710677), -0.707);
    }

    #[test]
    fn test_round3_near_ties() {
        // 0.0005_f32 is slightly above 0.0005, the f32 product 0.0005 * 1000 is exactly 0.5
        assert_eq!(round3(0.0005), 0.001);
        assert_eq!(round3(-0.0005), -0.001);
        assert_eq!(round3(0.0015), 0.002);
        // Exact ties still go to even
        assert_eq!(round3(0.5), 0.5);
        assert_eq!(round3(2.0625), 2.062);
    }

    #[test]
    fn test_format_vector_hides_negative_zero() {
        assert_eq!(format_vector(&[-0.0, 1.0, -2.5]), "[0.000, 1.000, -2.500]");
    }
}
