//! Builds point clouds by calling a strategy repeatedly.

use crate::registry::DiskStrategy;
use crate::samplers::Sampler;
use crate::stats;
use cgmath::Point2;
use std::time::Instant;

/// Default number of points of a cloud
pub const DEFAULT_NB_POINTS: usize = 3141;

/// Call `strategy` exactly `nb_points` times
pub fn generate(
    strategy: DiskStrategy,
    sampler: &mut dyn Sampler,
    nb_points: usize,
) -> Vec<Point2<f64>> {
    info!("Sampling {} points with '{}'", nb_points, strategy);
    let start = Instant::now();
    #[cfg(feature = "progress-bar")]
    let mut progress = {
        let mut p = pbr::ProgressBar::new(nb_points as u64);
        p.set_max_refresh_rate(Some(std::time::Duration::from_millis(100)));
        p
    };

    let mut points = Vec::with_capacity(nb_points);
    for _ in 0..nb_points {
        points.push(strategy.sample(sampler));
        #[cfg(feature = "progress-bar")]
        progress.inc();
    }

    #[cfg(feature = "progress-bar")]
    progress.finish();
    info!("Elapsed: {} ms", start.elapsed().as_millis());
    points
}

#[derive(Debug, Clone)]
pub struct SampleSummary {
    pub nb_points: usize,
    pub mean_radius: f64,
    pub max_radius: f64,
    /// KS distance to the radius law of the strategy
    pub ks_statistic: f64,
    pub ks_critical: f64,
}

impl SampleSummary {
    /// Radius distribution consistent with the expected law
    pub fn consistent(&self) -> bool {
        self.ks_statistic <= self.ks_critical
    }
}

/// Radius statistics of a cloud against the law of `strategy`.
/// Returns `None` for an empty cloud.
pub fn summarize(strategy: DiskStrategy, points: &[Point2<f64>]) -> Option<SampleSummary> {
    if points.is_empty() {
        return None;
    }
    let profile = strategy.radius_profile();
    let summary = SampleSummary {
        nb_points: points.len(),
        mean_radius: stats::mean_radius(points),
        max_radius: stats::max_radius(points),
        ks_statistic: stats::radius_ks(points, profile),
        ks_critical: stats::ks_critical_value(points.len()),
    };
    info!(
        "Mean radius: {:.4} (expected {:.4}), max radius: {:.6}",
        summary.mean_radius,
        profile.mean(),
        summary.max_radius
    );
    if summary.consistent() {
        info!(
            "KS distance to {:?}: {:.5} (critical {:.5})",
            profile, summary.ks_statistic, summary.ks_critical
        );
    } else {
        warn!(
            "KS distance to {:?}: {:.5} exceeds critical {:.5}",
            profile, summary.ks_statistic, summary.ks_critical
        );
    }
    Some(summary)
}
