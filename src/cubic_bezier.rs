use num_traits::One;

use super::basis::Basis;
use super::error::SplineError;
use super::point::{scalar, Point};
use super::spline::Spline;
use super::LineSegment;

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Build the curve from a node list, which must hold exactly four points.
    pub fn from_nodes(nodes: &[P]) -> Result<Self, SplineError> {
        match *nodes {
            [start, ctrl1, ctrl2, end] => Ok(CubicBezier::new(start, ctrl1, ctrl2, end)),
            _ => Err(SplineError::WrongNodeCount {
                basis: Basis::CubicBezier,
                required: Basis::CubicBezier.min_nodes(),
                found: nodes.len(),
            }),
        }
    }

    /// The two handles connecting each endpoint to its control point.
    pub fn handles(&self) -> [LineSegment<P>; 2] {
        [
            LineSegment::new(self.start, self.ctrl1),
            LineSegment::new(self.ctrl2, self.end),
        ]
    }
}

impl<P: Point> Spline<P> for CubicBezier<P> {
    /// Evaluate the curve at t by direct evaluation of the polynomial
    fn eval(&self, t: P::Scalar) -> P {
        let three: P::Scalar = scalar(3.0);
        let one_t = P::Scalar::one() - t;
        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (three * one_t * one_t * t)
            + self.ctrl2 * (three * one_t * t * t)
            + self.end * (t * t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lerp, Point3, PointN, PointNorm, EPSILON};

    fn arch() -> CubicBezier<Point3<f64>> {
        CubicBezier::new(
            Point3::new([0.0, 0.0, 0.0]),
            Point3::new([0.0, 10.0, 0.0]),
            Point3::new([10.0, 10.0, 0.0]),
            Point3::new([10.0, 0.0, 0.0]),
        )
    }

    #[test]
    fn eval_endpoints_and_midpoint() {
        let curve = arch();
        assert!((curve.eval(0.0) - curve.start).squared_norm() < EPSILON);
        assert!((curve.eval(1.0) - curve.end).squared_norm() < EPSILON);
        // 1/8 P0 + 3/8 P1 + 3/8 P2 + 1/8 P3
        assert!((curve.eval(0.5) - Point3::new([5.0, 7.5, 0.0])).squared_norm() < EPSILON);
    }

    #[test]
    /// Controls at the thirds of a line reproduce that line
    /// at uniform speed
    fn collinear_thirds_move_linearly() {
        let start = PointN::new([0f64, 1.77]);
        let end = PointN::new([4.3, -4.0]);
        let curve = CubicBezier::new(
            start,
            lerp(start, end, 1.0 / 3.0),
            lerp(start, end, 2.0 / 3.0),
            end,
        );

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let err = curve.eval(t) - lerp(start, end, t);
            assert!(err.squared_norm() < EPSILON);
        }
    }

    #[test]
    fn from_nodes_requires_four_points() {
        let curve = arch();
        let nodes = [curve.start, curve.ctrl1, curve.ctrl2, curve.end];
        assert_eq!(CubicBezier::from_nodes(&nodes), Ok(curve));
        assert_eq!(
            CubicBezier::from_nodes(&nodes[..3]),
            Err(SplineError::WrongNodeCount {
                basis: Basis::CubicBezier,
                required: 4,
                found: 3
            })
        );
    }

    #[test]
    fn handles_connect_endpoints_to_controls() {
        let [first, second] = arch().handles();
        assert_eq!(first.start(), Point3::new([0.0, 0.0, 0.0]));
        assert_eq!(first.end(), Point3::new([0.0, 10.0, 0.0]));
        assert_eq!(second.start(), Point3::new([10.0, 10.0, 0.0]));
        assert_eq!(second.end(), Point3::new([10.0, 0.0, 0.0]));
    }
}
