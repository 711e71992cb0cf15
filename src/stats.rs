//! Statistics over point clouds drawn from the disk.

use cgmath::{EuclideanSpace, InnerSpace, Point2};
use std::f64::consts::TAU;

/// Theoretical radius law of a disk strategy
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RadiusProfile {
    /// P(radius < rho) = rho
    Linear,
    /// P(radius < rho) = rho^2
    AreaUniform,
}

impl RadiusProfile {
    pub fn cdf(&self, rho: f64) -> f64 {
        let rho = rho.max(0.0).min(1.0);
        match self {
            RadiusProfile::Linear => rho,
            RadiusProfile::AreaUniform => rho * rho,
        }
    }

    pub fn mean(&self) -> f64 {
        match self {
            RadiusProfile::Linear => 0.5,
            RadiusProfile::AreaUniform => 2.0 / 3.0,
        }
    }
}

pub fn radius(p: &Point2<f64>) -> f64 {
    p.to_vec().magnitude()
}

/// Polar angle in [0, 2pi)
pub fn angle(p: &Point2<f64>) -> f64 {
    let a = p.y.atan2(p.x);
    if a < 0.0 {
        // tiny negative angles must not land on 2pi
        let a = a + TAU;
        if a >= TAU {
            0.0
        } else {
            a
        }
    } else {
        a
    }
}

pub fn mean_radius(points: &[Point2<f64>]) -> f64 {
    assert!(!points.is_empty());
    points.iter().map(radius).sum::<f64>() / points.len() as f64
}

pub fn max_radius(points: &[Point2<f64>]) -> f64 {
    points.iter().map(radius).fold(0.0, f64::max)
}

/// One sample Kolmogorov-Smirnov statistic of `samples` against `cdf`.
///
/// NaN samples still count towards `n` but never raise the distance.
pub fn ks_statistic<F: Fn(f64) -> f64>(mut samples: Vec<f64>, cdf: F) -> f64 {
    assert!(!samples.is_empty());
    samples.sort_by(f64::total_cmp);
    let n = samples.len() as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let above = (i + 1) as f64 / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}

/// Asymptotic critical value of the KS statistic at significance `alpha`
pub fn ks_critical_value_at(n: usize, alpha: f64) -> f64 {
    (-(alpha / 2.0).ln() / 2.0).sqrt() / (n as f64).sqrt()
}

/// Critical value of the KS statistic at alpha = 0.001
pub fn ks_critical_value(n: usize) -> f64 {
    ks_critical_value_at(n, 0.001)
}

pub fn radius_ks(points: &[Point2<f64>], profile: RadiusProfile) -> f64 {
    ks_statistic(points.iter().map(radius).collect(), |rho| profile.cdf(rho))
}

/// Count of points per angular octant, starting at angle 0
pub fn octant_histogram(points: &[Point2<f64>]) -> [usize; 8] {
    let mut bins = [0; 8];
    for p in points {
        let i = (angle(p) / TAU * 8.0) as usize;
        bins[i.min(7)] += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_range() {
        assert_approx_eq!(angle(&Point2::new(1.0, 0.0)), 0.0);
        assert_approx_eq!(angle(&Point2::new(0.0, -1.0)), 1.5 * std::f64::consts::PI);
        assert_eq!(angle(&Point2::new(1.0, -0.0)), 0.0);
        assert!(angle(&Point2::new(1.0, -1e-300)) < TAU);
    }

    #[test]
    fn octants() {
        let points = vec![
            Point2::new(1.0, 0.1),
            Point2::new(0.1, 1.0),
            Point2::new(-1.0, -0.1),
            Point2::new(1.0, -0.1),
        ];
        assert_eq!(octant_histogram(&points), [1, 1, 0, 0, 1, 0, 0, 1]);
    }

    #[test]
    fn ks_exact_grid() {
        // Midpoints of a regular grid are as close as possible to the CDF
        let n = 1000;
        let samples: Vec<f64> = (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect();
        assert_approx_eq!(ks_statistic(samples, |x| x), 0.5 / n as f64, 1e-12);
    }

    #[test]
    fn ks_ignores_nan_samples() {
        let samples = vec![0.75, f64::NAN, 0.25];
        assert_approx_eq!(ks_statistic(samples, |x| x), 0.75 - 1.0 / 3.0, 1e-12);
    }

    #[test]
    fn ks_detects_shift() {
        let samples: Vec<f64> = (0..1000).map(|i| i as f64 / 2000.0).collect();
        assert!(ks_statistic(samples, |x| x) > 0.49);
    }

    #[test]
    fn critical_values() {
        assert_approx_eq!(ks_critical_value(10_000), 0.01949, 1e-4);
        assert_approx_eq!(ks_critical_value_at(100, 0.05), 0.1358, 1e-4);
    }

    #[test]
    fn profiles() {
        assert_eq!(RadiusProfile::Linear.cdf(0.5), 0.5);
        assert_eq!(RadiusProfile::AreaUniform.cdf(0.5), 0.25);
        assert_eq!(RadiusProfile::AreaUniform.cdf(2.0), 1.0);
        assert_approx_eq!(
            mean_radius(&[Point2::new(0.3, 0.4), Point2::new(0.0, -1.0)]),
            0.75
        );
        assert_eq!(max_radius(&[Point2::new(0.3, 0.4), Point2::new(0.0, -1.0)]), 1.0);
    }
}
