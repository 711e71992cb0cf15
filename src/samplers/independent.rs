use crate::samplers::*;
use rand::prelude::*;

pub struct IndependentSampler {
    pub rnd: rand::rngs::SmallRng,
}

impl Sampler for IndependentSampler {
    fn next(&mut self) -> f64 {
        self.rnd.gen()
    }
}

impl Default for IndependentSampler {
    fn default() -> Self {
        IndependentSampler::from_seed(random())
    }
}

impl IndependentSampler {
    pub fn from_seed(seed: u64) -> Self {
        IndependentSampler {
            rnd: rand::rngs::SmallRng::seed_from_u64(seed),
        }
    }
}
