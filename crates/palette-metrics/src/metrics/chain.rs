//! Distance chain: ΔE00 between neighbouring colors.
//!
//! Where the pairwise matrix answers "can any two colors be confused", the
//! chain answers "does each step of an ordered ramp stay visible". Colors can
//! first be sorted by their distance to a reference color, which turns an
//! unordered palette into a light-to-dark (or dark-to-light) ramp.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::distance::{ciede2000, is_noticeable};
use crate::color::{Lab, Rgb};
use crate::palette::{Palette, ParseColorError};

/// Color the chain is sorted against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceColor {
    /// sRGB white (255, 255, 255)
    White,
    /// sRGB black (0, 0, 0)
    Black,
    /// Any Lab color
    Custom(Lab),
}

impl ReferenceColor {
    /// Lab value of the reference.
    pub fn lab(self) -> Lab {
        match self {
            ReferenceColor::White => Lab::from(Rgb::WHITE),
            ReferenceColor::Black => Lab::from(Rgb::BLACK),
            ReferenceColor::Custom(lab) => lab,
        }
    }
}

impl FromStr for ReferenceColor {
    type Err = ParseColorError;

    /// Parse `white`, `black` (any case) or a hex color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(ReferenceColor::White),
            "black" => Ok(ReferenceColor::Black),
            _ => Rgb::from_hex(s).map(|rgb| ReferenceColor::Custom(Lab::from(rgb))),
        }
    }
}

/// Colors in chain order with the distance across each step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DistanceChain {
    /// Palette labels in chain order
    pub colors: Vec<String>,
    /// Original palette position of each chain element
    pub indices: Vec<usize>,
    /// Lab values in chain order, as `[L, a, b]`
    pub lab: Vec<[f64; 3]>,
    /// `distances[k]` is ΔE00 between chain elements `k` and `k + 1`
    pub distances: Vec<f64>,
    /// `noticeable[k]` is `distances[k] > threshold`
    pub noticeable: Vec<bool>,
}

/// Palette positions sorted by ascending ΔE00 to `reference`.
///
/// The sort is stable: colors at the same distance keep their palette order.
pub fn sort_by_reference(colors: &[Lab], reference: ReferenceColor) -> Vec<usize> {
    let reference = reference.lab();
    let ref_distances: Vec<f64> = colors.iter().map(|&c| ciede2000(c, reference)).collect();

    let mut indices: Vec<usize> = (0..colors.len()).collect();
    indices.sort_by(|&a, &b| ref_distances[a].total_cmp(&ref_distances[b]));
    indices
}

/// ΔE00 between each adjacent pair, `n - 1` values for `n` colors.
pub fn consecutive_distances(colors: &[Lab]) -> Vec<f64> {
    colors
        .windows(2)
        .map(|pair| ciede2000(pair[0], pair[1]))
        .collect()
}

/// Build the distance chain for a palette.
///
/// With `sort` set, colors are first reordered by distance to the reference;
/// otherwise palette order is kept. A one-color palette yields a chain with
/// no steps.
///
/// # Example
///
/// ```
/// use palette_metrics::{distance_chain, Palette, ReferenceColor};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff", "#808080"]).unwrap();
/// let chain = distance_chain(&palette, Some(ReferenceColor::White), 5.0);
///
/// assert_eq!(chain.indices, vec![1, 2, 0]);
/// assert_eq!(chain.distances.len(), 2);
/// ```
pub fn distance_chain(
    palette: &Palette,
    sort: Option<ReferenceColor>,
    threshold: f64,
) -> DistanceChain {
    let lab = palette.lab();
    let indices = match sort {
        Some(reference) => sort_by_reference(&lab, reference),
        None => (0..lab.len()).collect(),
    };

    let ordered: Vec<Lab> = indices.iter().map(|&i| lab[i]).collect();
    let distances = consecutive_distances(&ordered);
    let noticeable = distances
        .iter()
        .map(|&d| is_noticeable(d, threshold))
        .collect();

    tracing::debug!(
        colors = ordered.len(),
        sorted = sort.is_some(),
        "Computed distance chain"
    );

    DistanceChain {
        colors: indices
            .iter()
            .map(|&i| palette.entries()[i].label.clone())
            .collect(),
        lab: ordered.iter().map(|c| c.to_array()).collect(),
        indices,
        distances,
        noticeable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_count() {
        let colors = [
            Lab::new(10.0, 0.0, 0.0),
            Lab::new(20.0, 0.0, 0.0),
            Lab::new(30.0, 0.0, 0.0),
            Lab::new(40.0, 0.0, 0.0),
        ];
        let distances = consecutive_distances(&colors);

        assert_eq!(distances.len(), 3);
        assert_eq!(distances[2], ciede2000(colors[2], colors[3]));
    }

    #[test]
    fn test_single_and_empty() {
        assert!(consecutive_distances(&[Lab::new(50.0, 0.0, 0.0)]).is_empty());
        assert!(consecutive_distances(&[]).is_empty());
        assert!(sort_by_reference(&[], ReferenceColor::White).is_empty());
    }

    #[test]
    fn test_sort_grays_against_white_and_black() {
        let colors = [
            Lab::new(30.0, 0.0, 0.0),
            Lab::new(90.0, 0.0, 0.0),
            Lab::new(60.0, 0.0, 0.0),
        ];

        assert_eq!(sort_by_reference(&colors, ReferenceColor::White), vec![1, 2, 0]);
        assert_eq!(sort_by_reference(&colors, ReferenceColor::Black), vec![0, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let gray = Lab::new(50.0, 0.0, 0.0);
        let colors = [gray, Lab::new(95.0, 0.0, 0.0), gray, gray];

        assert_eq!(
            sort_by_reference(&colors, ReferenceColor::White),
            vec![1, 0, 2, 3]
        );
    }

    #[test]
    fn test_custom_reference() {
        let colors = [Lab::new(20.0, 0.0, 0.0), Lab::new(50.0, 0.0, 0.0)];
        let reference = ReferenceColor::Custom(Lab::new(48.0, 0.0, 0.0));

        assert_eq!(sort_by_reference(&colors, reference), vec![1, 0]);
    }

    #[test]
    fn test_reference_from_str() {
        assert_eq!("white".parse::<ReferenceColor>(), Ok(ReferenceColor::White));
        assert_eq!("BLACK".parse::<ReferenceColor>(), Ok(ReferenceColor::Black));
        assert_eq!(
            "#808080".parse::<ReferenceColor>(),
            Ok(ReferenceColor::Custom(Lab::from(Rgb::new(128, 128, 128))))
        );
        assert!("grey".parse::<ReferenceColor>().is_err());
    }

    #[test]
    fn test_chain_unsorted_keeps_palette_order() {
        let palette = Palette::from_hex(&["#000000", "#ffffff", "#808080"]).unwrap();
        let chain = distance_chain(&palette, None, 5.0);

        assert_eq!(chain.indices, vec![0, 1, 2]);
        assert_eq!(chain.colors, vec!["#000000", "#ffffff", "#808080"]);
        assert_eq!(chain.lab.len(), 3);
        assert_eq!(chain.distances.len(), 2);
        assert_eq!(chain.noticeable, vec![true, true]);
    }

    #[test]
    fn test_chain_sorted_relabels() {
        let palette = Palette::from_hex(&["#000000", "#ffffff", "#808080"]).unwrap();
        let chain = distance_chain(&palette, Some(ReferenceColor::Black), 5.0);

        assert_eq!(chain.colors, vec!["#000000", "#808080", "#ffffff"]);
        assert_eq!(chain.lab[2], Lab::from(Rgb::WHITE).to_array());
    }

    #[test]
    fn test_chain_threshold() {
        let palette = Palette::from_hex(&["#808080", "#818181"]).unwrap();
        let chain = distance_chain(&palette, None, 5.0);

        assert_eq!(chain.distances.len(), 1);
        assert!(chain.distances[0] < 1.0);
        assert_eq!(chain.noticeable, vec![false]);
    }
}
