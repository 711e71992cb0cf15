//! Ways to draw one random point from the closed unit disk.
//!
//! Every function consumes draws from a [`Sampler`] and returns a point with
//! `x * x + y * y <= 1`. Only [`sample_cartesian`] may retry; the polar
//! strategies stay inside the disk by construction.

use crate::samplers::Sampler;
use cgmath::Point2;
use std::f64::consts::TAU;

/// Angle uniform in [0, 2pi)
pub fn sample_angle(sampler: &mut dyn Sampler) -> f64 {
    sampler.next() * TAU
}

pub fn polar_to_cartesian(r: f64, theta: f64) -> Point2<f64> {
    let (sin_theta, cos_theta) = theta.sin_cos();
    Point2::new(r * cos_theta, r * sin_theta)
}

/// Rejection sampling from the [-1, 1)^2 square.
///
/// Acceptance probability per trial is pi/4, so about 1.27 trials on average.
/// The loop is not capped: giving up after a fixed number of trials would
/// bias the output.
pub fn sample_cartesian(sampler: &mut dyn Sampler) -> Point2<f64> {
    loop {
        let x = sampler.next() * 2.0 - 1.0;
        let y = sampler.next() * 2.0 - 1.0;
        if x * x + y * y < 1.0 {
            return Point2::new(x, y);
        }
    }
}

/// Naive polar sampling with the radius drawn uniformly.
///
/// This is NOT uniform over the disk: P(radius < rho) = rho instead of
/// rho^2, so points pile up near the center. Kept as is for comparison.
pub fn sample_polar(sampler: &mut dyn Sampler) -> Point2<f64> {
    let theta = sample_angle(sampler);
    let r = sampler.next();
    polar_to_cartesian(r, theta)
}

/// Polar sampling with r = sqrt(u), area-uniform.
pub fn sample_inverse(sampler: &mut dyn Sampler) -> Point2<f64> {
    let theta = sample_angle(sampler);
    let r = sampler.next().sqrt();
    polar_to_cartesian(r, theta)
}

/// Polar sampling with the sum of two uniforms folded back onto [0, 1].
///
/// The sum has a tent density on [0, 2]; reflecting `s >= 1` to `2 - s`
/// adds both halves together, giving density 2r on [0, 1].
pub fn sample_triangle(sampler: &mut dyn Sampler) -> Point2<f64> {
    let theta = sample_angle(sampler);
    let s = sampler.next() + sampler.next();
    let r = if s >= 1.0 { 2.0 - s } else { s };
    polar_to_cartesian(r, theta)
}

/// Polar sampling with the maximum of two uniforms (density 2r on [0, 1]).
pub fn sample_max(sampler: &mut dyn Sampler) -> Point2<f64> {
    let theta = sample_angle(sampler);
    let r1 = sampler.next();
    let r2 = sampler.next();
    polar_to_cartesian(r1.max(r2), theta)
}
