//! CIEDE2000 color difference and pairwise distance matrices.
//!
//! Implements the CIE Technical Report 142-2001 formula (ΔE00) with the
//! graphic-arts parametric factors `kL = kC = kH = 1`.
//!
//! # References
//!
//! G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application 30(1), 2005.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::color::Lab;

/// Default "noticeable difference" threshold for ΔE00.
///
/// Based on Mokrzycki & Tatol, "Color difference Delta E - A survey",
/// Machine Graphics and Vision 20 (2011): above 5 an observer sees two
/// different colors.
pub const DEFAULT_NOTICEABLE_THRESHOLD: f64 = 5.0;

/// 25^7, the chroma normalization constant in G and RC.
const POW25_7: f64 = 6_103_515_625.0;

/// CIEDE2000 color difference (ΔE00) between two Lab colors.
///
/// Symmetric in its arguments and zero for identical inputs.
///
/// # Example
///
/// ```
/// use palette_metrics::{ciede2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((ciede2000(a, b) - 2.0425).abs() < 1e-4);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    const KL: f64 = 1.0;
    const KC: f64 = 1.0;
    const KH: f64 = 1.0;

    // Chroma-dependent a* rescaling
    let c_ab_mean = (lab1.chroma() + lab2.chroma()) / 2.0;
    let c_ab_mean_pow7 = c_ab_mean.powi(7);
    let g = 0.5 * (1.0 - (c_ab_mean_pow7 / (c_ab_mean_pow7 + POW25_7)).sqrt());

    let a1_prime = lab1.a * (1.0 + g);
    let a2_prime = lab2.a * (1.0 + g);

    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);

    let h1_prime = hue_angle(a1_prime, lab1.b);
    let h2_prime = hue_angle(a2_prime, lab2.b);

    // Differences
    let delta_l_prime = lab2.l - lab1.l;
    let delta_c_prime = c2_prime - c1_prime;

    let chroma_product = c1_prime * c2_prime;
    let delta_h_prime = if chroma_product == 0.0 {
        0.0
    } else {
        let delta_h = h2_prime - h1_prime;
        if delta_h > 180.0 {
            delta_h - 360.0
        } else if delta_h < -180.0 {
            delta_h + 360.0
        } else {
            delta_h
        }
    };
    let delta_big_h_prime = 2.0 * chroma_product.sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    // Means
    let l_prime_mean = (lab1.l + lab2.l) / 2.0;
    let c_prime_mean = (c1_prime + c2_prime) / 2.0;
    let h_prime_mean = if chroma_product == 0.0 {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_prime_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_prime_mean).to_radians().cos()
        + 0.32 * (3.0 * h_prime_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_prime_mean - 63.0).to_radians().cos();

    // Weighting functions
    let l_offset_sq = (l_prime_mean - 50.0).powi(2);
    let sl = 1.0 + (0.015 * l_offset_sq) / (20.0 + l_offset_sq).sqrt();
    let sc = 1.0 + 0.045 * c_prime_mean;
    let sh = 1.0 + 0.015 * c_prime_mean * t;

    // Rotation term for the blue region
    let delta_theta = 30.0 * (-((h_prime_mean - 275.0) / 25.0).powi(2)).exp();
    let c_prime_mean_pow7 = c_prime_mean.powi(7);
    let rc = 2.0 * (c_prime_mean_pow7 / (c_prime_mean_pow7 + POW25_7)).sqrt();
    let rt = -(2.0 * delta_theta).to_radians().sin() * rc;

    let term_l = delta_l_prime / (KL * sl);
    let term_c = delta_c_prime / (KC * sc);
    let term_h = delta_big_h_prime / (KH * sh);

    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h)
        .max(0.0)
        .sqrt()
}

/// Hue angle in degrees, 0..360. Achromatic colors get 0.
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a) * 180.0 / PI;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Square matrix of ΔE00 distances, indexed by palette position.
///
/// Symmetric with a zero diagonal; every entry is ≥ 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Number of rows (and columns).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True for the 0×0 matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance between palette positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Rows in palette order.
    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// For each row `r` except the last, the smallest distance to any later
    /// column `c > r`, with its `(r, c)` position.
    ///
    /// On ties the lowest column wins. A greedy summary of how close each
    /// color gets to the colors after it.
    pub fn nearest_successors(&self) -> Vec<(f64, (usize, usize))> {
        let n = self.len();
        (0..n.saturating_sub(1))
            .map(|r| {
                let mut best_c = r + 1;
                let mut best_d = self.rows[r][best_c];
                for c in (r + 2)..n {
                    if self.rows[r][c] < best_d {
                        best_d = self.rows[r][c];
                        best_c = c;
                    }
                }
                (best_d, (r, best_c))
            })
            .collect()
    }
}

/// Boolean matrix marking which pairs differ noticeably.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct NoticeableMatrix {
    rows: Vec<Vec<bool>>,
}

impl NoticeableMatrix {
    /// Number of rows (and columns).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True for the 0×0 matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether positions `i` and `j` are noticeably different.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.rows[i][j]
    }

    /// Rows in palette order.
    #[inline]
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of noticeable pairs `(i, j)` with `i < j`.
    pub fn noticeable_pairs(&self) -> usize {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.iter().skip(i + 1).filter(|&&n| n).count())
            .sum()
    }
}

/// Compute the ΔE00 distance between every pair of colors.
///
/// Only the upper triangle is evaluated; the lower triangle is mirrored from
/// it, so `d[i][j] == d[j][i]` holds bit for bit. The diagonal is zero.
pub fn pairwise_distances(colors: &[Lab]) -> DistanceMatrix {
    let n = colors.len();
    let mut rows = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = ciede2000(colors[i], colors[j]);
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }

    DistanceMatrix { rows }
}

/// Whether a single distance counts as noticeable: strictly above `threshold`.
#[inline]
pub fn is_noticeable(distance: f64, threshold: f64) -> bool {
    distance > threshold
}

/// Classify every cell of a distance matrix against `threshold`.
pub fn classify_noticeable(matrix: &DistanceMatrix, threshold: f64) -> NoticeableMatrix {
    NoticeableMatrix {
        rows: matrix
            .rows
            .iter()
            .map(|row| row.iter().map(|&d| is_noticeable(d, threshold)).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sharma et al. (2005) supplementary test data, all 34 pairs.
    #[test]
    fn test_ciede2000_reference_pairs() {
        let cases = [
            (50.0, 2.6772, -79.7751, 50.0, 0.0, -82.7485, 2.0425),
            (50.0, 3.1571, -77.2803, 50.0, 0.0, -82.7485, 2.8615),
            (50.0, 2.8361, -74.0200, 50.0, 0.0, -82.7485, 3.4412),
            (50.0, -1.3802, -84.2814, 50.0, 0.0, -82.7485, 1.0000),
            (50.0, -1.1848, -84.8006, 50.0, 0.0, -82.7485, 1.0000),
            (50.0, -0.9009, -85.5211, 50.0, 0.0, -82.7485, 1.0000),
            (50.0, 0.0, 0.0, 50.0, -1.0, 2.0, 2.3669),
            (50.0, -1.0, 2.0, 50.0, 0.0, 0.0, 2.3669),
            (50.0, 2.4900, -0.0010, 50.0, -2.4900, 0.0009, 7.1792),
            (50.0, 2.4900, -0.0010, 50.0, -2.4900, 0.0010, 7.1792),
            (50.0, 2.4900, -0.0010, 50.0, -2.4900, 0.0011, 7.2195),
            (50.0, 2.4900, -0.0010, 50.0, -2.4900, 0.0012, 7.2195),
            (50.0, -0.0010, 2.4900, 50.0, 0.0009, -2.4900, 4.8045),
            (50.0, -0.0010, 2.4900, 50.0, 0.0010, -2.4900, 4.8045),
            (50.0, -0.0010, 2.4900, 50.0, 0.0011, -2.4900, 4.7461),
            (50.0, 2.5, 0.0, 50.0, 0.0, -2.5, 4.3065),
            (50.0, 2.5, 0.0, 73.0, 25.0, -18.0, 27.1492),
            (50.0, 2.5, 0.0, 61.0, -5.0, 29.0, 22.8977),
            (50.0, 2.5, 0.0, 56.0, -27.0, -3.0, 31.9030),
            (50.0, 2.5, 0.0, 58.0, 24.0, 15.0, 19.4535),
            (50.0, 2.5, 0.0, 50.0, 3.1736, 0.5854, 1.0000),
            (50.0, 2.5, 0.0, 50.0, 3.2972, 0.0, 1.0000),
            (50.0, 2.5, 0.0, 50.0, 1.8634, 0.5757, 1.0000),
            (50.0, 2.5, 0.0, 50.0, 3.2592, 0.3350, 1.0000),
            (60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644),
            (63.0109, -31.0961, -5.8663, 62.8187, -29.7946, -4.0864, 1.2630),
            (61.2901, 3.7196, -5.3901, 61.4292, 2.2480, -4.9620, 1.8731),
            (35.0831, -44.1164, 3.7933, 35.0232, -40.0716, 1.5901, 1.8645),
            (22.7233, 20.0904, -46.6940, 23.0331, 14.9730, -42.5619, 2.0373),
            (36.4612, 47.8580, 18.3852, 36.2715, 50.5065, 21.2231, 1.4146),
            (90.8027, -2.0831, 1.4410, 91.1528, -1.6435, 0.0447, 1.4441),
            (90.9257, -0.5406, -0.9208, 88.6381, -0.8985, -0.7239, 1.5381),
            (6.7747, -0.2908, -2.4247, 5.8714, -0.0985, -2.2286, 0.6377),
            (2.0776, 0.0795, -1.1350, 0.9033, -0.0636, -0.5514, 0.9082),
        ];

        for (i, &(l1, a1, b1, l2, a2, b2, expected)) in cases.iter().enumerate() {
            let lab1 = Lab::new(l1, a1, b1);
            let lab2 = Lab::new(l2, a2, b2);

            let forward = ciede2000(lab1, lab2);
            let backward = ciede2000(lab2, lab1);

            assert!(
                (forward - expected).abs() < 1e-4,
                "pair {}: expected {expected:.4}, got {forward:.6}",
                i + 1
            );
            assert!(
                (backward - expected).abs() < 1e-4,
                "pair {} reversed: expected {expected:.4}, got {backward:.6}",
                i + 1
            );
        }
    }

    #[test]
    fn test_identical_colors_zero() {
        let lab = Lab::new(50.0, 25.0, -30.0);
        assert_eq!(ciede2000(lab, lab), 0.0);
    }

    #[test]
    fn test_black_white_far_apart() {
        let de = ciede2000(Lab::new(0.0, 0.0, 0.0), Lab::new(100.0, 0.0, 0.0));
        assert!((de - 100.0).abs() < 1e-9, "got {de}");
    }

    #[test]
    fn test_matrix_shape_and_diagonal() {
        let colors = [
            Lab::new(20.0, 10.0, -5.0),
            Lab::new(60.0, -40.0, 30.0),
            Lab::new(90.0, 2.0, 80.0),
        ];
        let m = pairwise_distances(&colors);

        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.rows()[i].len(), 3);
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
                assert!(m.get(i, j) >= 0.0);
            }
        }
        assert_eq!(m.get(0, 2), ciede2000(colors[0], colors[2]));
    }

    #[test]
    fn test_empty_matrix() {
        let m = pairwise_distances(&[]);
        assert!(m.is_empty());
        assert!(m.nearest_successors().is_empty());
        assert!(classify_noticeable(&m, 5.0).is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_noticeable(5.0, 5.0));
        assert!(is_noticeable(5.000001, 5.0));
        assert!(!is_noticeable(0.0, 0.0));
    }

    #[test]
    fn test_classify_agrees_pointwise() {
        let colors = [
            Lab::new(50.0, 0.0, 0.0),
            Lab::new(52.0, 0.0, 0.0),
            Lab::new(70.0, 20.0, 0.0),
        ];
        let m = pairwise_distances(&colors);

        for threshold in [0.0, 1.0, 2.5, 5.0, 10.0, 100.0] {
            let noticeable = classify_noticeable(&m, threshold);
            for i in 0..3 {
                for j in 0..3 {
                    assert_eq!(noticeable.get(i, j), m.get(i, j) > threshold);
                }
            }
        }
    }

    #[test]
    fn test_noticeable_pairs_counts_upper_triangle() {
        let colors = [
            Lab::new(50.0, 0.0, 0.0),
            Lab::new(50.5, 0.0, 0.0),
            Lab::new(90.0, 0.0, 0.0),
        ];
        let noticeable = classify_noticeable(&pairwise_distances(&colors), 5.0);
        // Only the two pairs involving the light gray differ noticeably
        assert_eq!(noticeable.noticeable_pairs(), 2);
    }

    #[test]
    fn test_nearest_successors() {
        let colors = [
            Lab::new(50.0, 0.0, 0.0),
            Lab::new(90.0, 0.0, 0.0),
            Lab::new(52.0, 0.0, 0.0),
            Lab::new(88.0, 0.0, 0.0),
        ];
        let m = pairwise_distances(&colors);
        let nearest = m.nearest_successors();

        assert_eq!(nearest.len(), 3);
        assert_eq!(nearest[0].1, (0, 2));
        assert_eq!(nearest[1].1, (1, 3));
        assert_eq!(nearest[2].1, (2, 3));
        assert_eq!(nearest[0].0, m.get(0, 2));
    }
}
