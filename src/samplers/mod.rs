use cgmath::Point2;

/// Source of uniform random numbers in [0, 1)
pub trait Sampler {
    fn next(&mut self) -> f64;
    fn next2d(&mut self) -> Point2<f64> {
        let x = self.next();
        let y = self.next();
        Point2::new(x, y)
    }
}

pub mod independent;
pub mod replay;
