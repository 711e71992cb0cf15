use crate::samplers::*;

/// Plays back a fixed list of draws, starting over once exhausted.
///
/// Useful to check a strategy against values computed by hand. A sequence
/// that never satisfies the rejection test makes the `cartesian` strategy
/// loop forever.
pub struct ReplaySampler {
    values: Vec<f64>,
    indice: usize,
}

impl ReplaySampler {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "replay sampler needs at least one value");
        for v in &values {
            assert!(*v >= 0.0 && *v < 1.0, "replay value out of [0, 1): {}", v);
        }
        ReplaySampler { values, indice: 0 }
    }

    /// Number of values consumed so far
    pub fn consumed(&self) -> usize {
        self.indice
    }
}

impl Sampler for ReplaySampler {
    fn next(&mut self) -> f64 {
        let v = self.values[self.indice % self.values.len()];
        self.indice += 1;
        v
    }
}
