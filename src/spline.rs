//! Trait for common abstractions over all single-segment curve types (line, Bézier, Catmull-Rom)

use super::Point;

pub trait Spline<P: Point> {
    /// Raw curve position at `t` in [0, 1], without any arc-length correction.
    fn eval(&self, t: P::Scalar) -> P;
}
