use num_traits::One;

use super::point::{lerp, Point, PointNorm};
use super::spline::Spline;
use super::table::SegmentTable;

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval()
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment<P> {
    pub(crate) start: P,
    pub(crate) end: P,
}

impl<P: Point> LineSegment<P> {
    pub fn new(start: P, end: P) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }
}

impl<P: Point> Spline<P> for LineSegment<P> {
    fn eval(&self, t: P::Scalar) -> P {
        lerp(self.start, self.end, t)
    }
}

/// Sample a polyline at arc-length fraction `t` (already clamped to [0, 1])
/// using the per-segment table built from the same `nodes`.
pub(crate) fn eval_polyline<P>(nodes: &[P], table: &SegmentTable<P::Scalar>, t: P::Scalar) -> P
where
    P: PointNorm,
{
    if t >= P::Scalar::one() {
        return nodes[nodes.len() - 1];
    }
    let (segment, factor) = table.locate(t);
    LineSegment::new(nodes[segment], nodes[segment + 1]).eval(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point3, EPSILON};

    /// Check whether a line segment interpolation p + t*(q-p) at t=0.5
    /// yields equal distance to the start (p)/end (q) points (up to machine accuracy).
    #[test]
    fn line_segment_interpolation() {
        let line = LineSegment::new(
            Point3::new([0f64, 1.77, 0.0]),
            Point3::new([4.3, 3.0, -1.0]),
        );

        let mid = line.eval(0.5);
        assert!(
            ((mid - line.start()).squared_norm() - (mid - line.end()).squared_norm()).abs()
                < EPSILON
        );
    }

    #[test]
    fn polyline_walks_segments_by_length() {
        // a short leg followed by a leg three times as long
        let nodes = [
            Point3::new([0f64, 0.0, 0.0]),
            Point3::new([1.0, 0.0, 0.0]),
            Point3::new([1.0, 3.0, 0.0]),
        ];
        let table = SegmentTable::from_nodes(&nodes);

        let quarter = eval_polyline(&nodes, &table, 0.25);
        assert!((quarter - nodes[1]).squared_norm() < EPSILON);

        let half = eval_polyline(&nodes, &table, 0.5);
        assert!((half - Point3::new([1.0, 1.0, 0.0])).squared_norm() < EPSILON);

        assert_eq!(eval_polyline(&nodes, &table, 1.0), nodes[2]);
    }
}
