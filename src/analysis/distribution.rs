//! Histogram binning and Gaussian kernel density estimation.

use serde::Serialize;

use crate::error::{EdaError, Result};

/// Number of evaluation points on a density curve.
pub const DENSITY_GRID_SIZE: usize = 100;

/// Bandwidths past the data range on each side of the curve.
const DENSITY_CUT: f64 = 3.0;

/// Equal-width histogram of a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    /// Raw counts per bin.
    pub counts: Vec<usize>,
    /// Counts normalised so the bars integrate to one.
    pub density: Vec<f64>,
}

impl Histogram {
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Centre of each bin.
    pub fn centers(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0)
    }
}

/// Kernel density estimate sampled on an evenly spaced grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityCurve {
    pub bandwidth: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// Every bin is half-open except the last, which also includes `max`.
/// A constant sample is centred in a unit-wide range. NaN and infinite
/// values are rejected.
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(EdaError::InvalidOption("bin count must be at least 1".into()));
    }
    if values.is_empty() {
        return Err(EdaError::InvalidOption("cannot bin an empty sample".into()));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(EdaError::InvalidOption("cannot bin non-finite values".into()));
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = ((v - lo) / width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    let n = values.len() as f64;
    let density = counts.iter().map(|&c| c as f64 / (n * width)).collect();

    log::debug!("Histogram: {bins} bins of width {width:.6} over [{lo}, {hi}]");

    Ok(Histogram {
        edges,
        counts,
        density,
    })
}

/// Gaussian KDE with Scott's rule bandwidth, `sample_std * n^(-1/5)`.
///
/// Returns `None` when there are fewer than two values or no spread.
pub fn density(values: &[f64]) -> Option<DensityCurve> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mean = values.iter().sum::<f64>() / nf;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    let std_dev = variance.sqrt();
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return None;
    }

    let bandwidth = std_dev * nf.powf(-0.2);
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let start = lo - DENSITY_CUT * bandwidth;
    let end = hi + DENSITY_CUT * bandwidth;
    let step = (end - start) / (DENSITY_GRID_SIZE - 1) as f64;

    let norm = 1.0 / (nf * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let x: Vec<f64> = (0..DENSITY_GRID_SIZE).map(|i| start + i as f64 * step).collect();
    let y = x
        .iter()
        .map(|&xi| {
            values
                .iter()
                .map(|&v| {
                    let u = (xi - v) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                * norm
        })
        .collect();

    log::debug!("Density: n = {n}, bandwidth = {bandwidth:.6}");

    Some(DensityCurve { bandwidth, x, y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_every_value() {
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let h = histogram(&data, 10).unwrap();
        assert_eq!(h.n_bins(), 10);
        assert_eq!(h.edges.len(), 11);
        assert_eq!(h.counts.iter().sum::<usize>(), 100);
        assert!(h.counts.iter().all(|&c| c == 10));
    }

    #[test]
    fn max_lands_in_last_bin() {
        let h = histogram(&[0.0, 1.0, 2.0], 2).unwrap();
        assert_eq!(h.counts, vec![1, 2]);
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn density_heights_integrate_to_one() {
        let data = [1.0, 2.0, 2.5, 3.0, 7.0, 8.0];
        let h = histogram(&data, 7).unwrap();
        let area: f64 = h.density.iter().map(|d| d * h.bin_width()).sum();
        assert!((area - 1.0).abs() < 1e-9);
    }

    #[test]
    fn constant_sample_gets_unit_range() {
        let h = histogram(&[4.0, 4.0, 4.0], 5).unwrap();
        assert_eq!(h.edges.first(), Some(&3.5));
        assert_eq!(h.edges.last(), Some(&4.5));
        assert_eq!(h.counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn zero_bins_rejected() {
        assert!(matches!(histogram(&[1.0], 0), Err(EdaError::InvalidOption(_))));
    }

    #[test]
    fn non_finite_values_rejected() {
        assert!(matches!(
            histogram(&[1.0, 2.0, f64::INFINITY], 4),
            Err(EdaError::InvalidOption(_))
        ));
        assert!(matches!(
            histogram(&[f64::NAN], 4),
            Err(EdaError::InvalidOption(_))
        ));
    }

    #[test]
    fn density_is_normalised() {
        let data: Vec<f64> = (0..50).map(|i| (i as f64 * 0.37).sin() * 3.0).collect();
        let kde = density(&data).unwrap();
        assert_eq!(kde.x.len(), DENSITY_GRID_SIZE);
        let step = kde.x[1] - kde.x[0];
        let area: f64 = kde.y.iter().sum::<f64>() * step;
        assert!((area - 1.0).abs() < 0.02, "area = {area}");
        assert!(kde.x[0] < -3.0 && *kde.x.last().unwrap() > 3.0);
    }

    #[test]
    fn density_needs_spread() {
        assert!(density(&[1.0]).is_none());
        assert!(density(&[2.0, 2.0, 2.0]).is_none());
    }

    #[test]
    fn scott_bandwidth() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let kde = density(&data).unwrap();
        let expected = 2.5f64.sqrt() * 5f64.powf(-0.2);
        assert!((kde.bandwidth - expected).abs() < 1e-12);
    }
}
