use crate::disk;
use crate::samplers::Sampler;
use crate::stats::RadiusProfile;
use cgmath::Point2;
use std::error::Error;
use std::fmt;

/// Draws one point from the unit disk
pub type Strategy = fn(&mut dyn Sampler) -> Point2<f64>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DiskStrategy {
    /// Rejection sampling inside the enclosing square
    Cartesian,
    /// Uniform angle and uniform radius (clusters at the center)
    Polar,
    /// Uniform angle and square root of a uniform radius
    Inverse,
    /// Uniform angle and folded sum of two uniforms
    Triangle,
    /// Uniform angle and maximum of two uniforms
    Max,
}

impl DiskStrategy {
    pub const ALL: [DiskStrategy; 5] = [
        DiskStrategy::Cartesian,
        DiskStrategy::Polar,
        DiskStrategy::Inverse,
        DiskStrategy::Triangle,
        DiskStrategy::Max,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DiskStrategy::Cartesian => "cartesian",
            DiskStrategy::Polar => "polar",
            DiskStrategy::Inverse => "inverse",
            DiskStrategy::Triangle => "triangle",
            DiskStrategy::Max => "max",
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            DiskStrategy::Cartesian => disk::sample_cartesian,
            DiskStrategy::Polar => disk::sample_polar,
            DiskStrategy::Inverse => disk::sample_inverse,
            DiskStrategy::Triangle => disk::sample_triangle,
            DiskStrategy::Max => disk::sample_max,
        }
    }

    pub fn sample(&self, sampler: &mut dyn Sampler) -> Point2<f64> {
        (self.strategy())(sampler)
    }

    /// Radius law the strategy produces
    pub fn radius_profile(&self) -> RadiusProfile {
        match self {
            DiskStrategy::Polar => RadiusProfile::Linear,
            _ => RadiusProfile::AreaUniform,
        }
    }
}

impl fmt::Display for DiskStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy {
    pub name: String,
    pub expected: Vec<&'static str>,
}

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown distribution '{}' (expected one of: {})",
            self.name,
            self.expected.join(", ")
        )
    }
}

impl Error for UnknownStrategy {}

/// Ordered name -> strategy table.
///
/// Built once and handed around by reference. The first entry is the default.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    entries: Vec<DiskStrategy>,
}

impl StrategyRegistry {
    pub fn new(entries: Vec<DiskStrategy>) -> Self {
        assert!(!entries.is_empty(), "registry needs at least one strategy");
        for (i, s) in entries.iter().enumerate() {
            assert!(
                !entries[..i].contains(s),
                "strategy registered twice: {}",
                s
            );
        }
        StrategyRegistry { entries }
    }

    pub fn get(&self, name: &str) -> Option<DiskStrategy> {
        self.entries.iter().copied().find(|s| s.name() == name)
    }

    pub fn parse(&self, name: &str) -> Result<DiskStrategy, UnknownStrategy> {
        self.get(name).ok_or_else(|| UnknownStrategy {
            name: name.to_string(),
            expected: self.names(),
        })
    }

    pub fn default_strategy(&self) -> DiskStrategy {
        self.entries[0]
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|s| s.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = DiskStrategy> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        StrategyRegistry::new(DiskStrategy::ALL.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::independent::IndependentSampler;

    #[test]
    fn fixed_names_in_order() {
        let registry = StrategyRegistry::default();
        assert_eq!(
            registry.names(),
            vec!["cartesian", "polar", "inverse", "triangle", "max"]
        );
        assert_eq!(registry.default_strategy(), DiskStrategy::Cartesian);
    }

    #[test]
    fn lookup_returns_working_strategy() {
        let registry = StrategyRegistry::default();
        let mut sampler = IndependentSampler::from_seed(11);
        for name in registry.names() {
            let strategy = registry.get(name).unwrap();
            assert_eq!(strategy.name(), name);
            assert_eq!(strategy.to_string(), name);
            for _ in 0..100 {
                let p = (strategy.strategy())(&mut sampler);
                assert!(p.x * p.x + p.y * p.y <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn unknown_name() {
        let registry = StrategyRegistry::default();
        assert_eq!(registry.get("gaussian"), None);
        let err = registry.parse("gaussian").unwrap_err();
        assert_eq!(err.name, "gaussian");
        assert!(err.to_string().contains("cartesian, polar, inverse, triangle, max"));
    }

    #[test]
    fn custom_order_changes_default() {
        let registry = StrategyRegistry::new(vec![DiskStrategy::Max, DiskStrategy::Polar]);
        assert_eq!(registry.default_strategy(), DiskStrategy::Max);
        assert_eq!(registry.get("inverse"), None);
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    #[should_panic]
    fn duplicate_entries() {
        StrategyRegistry::new(vec![DiskStrategy::Max, DiskStrategy::Max]);
    }

    #[test]
    fn only_polar_is_linear() {
        for s in DiskStrategy::ALL.iter() {
            let expected = if *s == DiskStrategy::Polar {
                RadiusProfile::Linear
            } else {
                RadiusProfile::AreaUniform
            };
            assert_eq!(s.radius_profile(), expected);
        }
    }
}
