//! Assertion helpers for tests.

use palette_metrics::DistanceMatrix;
use pretty_assertions::assert_eq;

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {} within {} of {}, diff {}",
        actual,
        tolerance,
        expected,
        (actual - expected).abs()
    );
}

/// Assert the matrix is square, symmetric, non-negative with a zero diagonal
pub fn assert_distance_matrix(matrix: &DistanceMatrix, n: usize) {
    assert_eq!(matrix.len(), n, "Expected {} rows", n);
    for (i, row) in matrix.rows().iter().enumerate() {
        assert_eq!(row.len(), n, "Row {} has wrong length", i);
        assert_eq!(row[i], 0.0, "Diagonal at {} is not zero", i);
        for (j, &d) in row.iter().enumerate() {
            assert!(d >= 0.0, "Negative distance at ({}, {})", i, j);
            assert_eq!(d, matrix.rows()[j][i], "Asymmetric at ({}, {})", i, j);
        }
    }
}

/// Assert a serialized metric result has the expected method and data keys
pub fn assert_metric_json(value: &serde_json::Value, method: &str, keys: &[&str]) {
    assert_eq!(value["method"], method, "Unexpected method in {}", value);
    let data = value["data"]
        .as_object()
        .unwrap_or_else(|| panic!("Expected data object in {}", value));
    let mut actual: Vec<&str> = data.keys().map(String::as_str).collect();
    actual.sort_unstable();
    let mut expected = keys.to_vec();
    expected.sort_unstable();
    assert_eq!(actual, expected);
}
