use crate::registry::DiskStrategy;
use crate::samplers::Sampler;
use cgmath::Point2;
use rand::distributions::Distribution;
use rand::Rng;

/// Lets any `rand::Rng` drive a disk strategy.
///
/// ```
/// use diskwarp::distribution::DiskDistribution;
/// use diskwarp::registry::DiskStrategy;
/// use rand::{Rng, SeedableRng};
///
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
/// let dist = DiskDistribution::new(DiskStrategy::Inverse);
/// for p in (&mut rng).sample_iter(&dist).take(10) {
///     assert!(p.x * p.x + p.y * p.y <= 1.0);
/// }
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DiskDistribution {
    pub strategy: DiskStrategy,
}

impl DiskDistribution {
    pub fn new(strategy: DiskStrategy) -> Self {
        DiskDistribution { strategy }
    }
}

struct RngSampler<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Sampler for RngSampler<'a, R> {
    fn next(&mut self) -> f64 {
        self.rng.gen()
    }
}

impl Distribution<Point2<f64>> for DiskDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2<f64> {
        self.strategy.sample(&mut RngSampler { rng })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::independent::IndependentSampler;
    use rand::SeedableRng;

    #[test]
    fn same_stream_as_independent_sampler() {
        // IndependentSampler draws from the same SmallRng
        for strategy in DiskStrategy::ALL.iter() {
            let mut rng = rand::rngs::SmallRng::seed_from_u64(99);
            let mut sampler = IndependentSampler::from_seed(99);
            let dist = DiskDistribution::new(*strategy);
            for _ in 0..50 {
                assert_eq!(dist.sample(&mut rng), strategy.sample(&mut sampler));
            }
        }
    }
}
