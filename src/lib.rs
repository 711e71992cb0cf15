// For the points
extern crate cgmath;
// For the random number generator
extern crate rand;
#[macro_use]
extern crate log;
// For the PFM export
extern crate byteorder;
// For the image (LDR) export
#[cfg(feature = "image")]
extern crate image;
#[cfg(feature = "progress-bar")]
extern crate pbr;

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

// all the modules
pub mod disk;
pub mod distribution;
pub mod harness;
#[cfg(feature = "image")]
pub mod plot;
pub mod registry;
pub mod samplers;
pub mod stats;
