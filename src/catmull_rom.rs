//! Uniform Catmull-Rom splines over a node list.
//!
//! A list of `n` nodes describes `n - 3` segments. The first and last node only
//! shape the tangents at the ends, so the curve runs from `nodes[1]` to `nodes[n - 2]`.

use alloc::vec::Vec;

use num_traits::Float;

use super::basis::Basis;
use super::error::SplineError;
use super::point::{distance, scalar, Point, PointNorm};
use super::spline::Spline;
use super::EPSILON;

/// One Catmull-Rom segment running from `p1` to `p2`, shaped by its neighbours `p0` and `p3`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CatmullRomSegment<P> {
    pub(crate) p0: P,
    pub(crate) p1: P,
    pub(crate) p2: P,
    pub(crate) p3: P,
}

impl<P: Point> CatmullRomSegment<P> {
    pub fn new(p0: P, p1: P, p2: P, p3: P) -> Self {
        CatmullRomSegment { p0, p1, p2, p3 }
    }
}

impl<P: Point> Spline<P> for CatmullRomSegment<P> {
    /// Evaluate the segment at local parameter `u` in [0, 1] with the standard basis matrix.
    fn eval(&self, u: P::Scalar) -> P {
        let half: P::Scalar = scalar(0.5);
        let two: P::Scalar = scalar(2.0);
        let three: P::Scalar = scalar(3.0);
        let four: P::Scalar = scalar(4.0);
        let five: P::Scalar = scalar(5.0);
        let (a, b, c, d) = (self.p0, self.p1, self.p2, self.p3);

        let cubic = b * three - a - c * three + d;
        let quadratic = a * two - b * five + c * four - d;
        let linear = c - a;

        (cubic * (u * u * u) + quadratic * (u * u) + linear * u + b * two) * half
    }
}

/// Evaluate the whole node list at `t`, clamped to [0, 1].
pub fn eval<P: Point>(nodes: &[P], t: P::Scalar) -> Result<P, SplineError> {
    Basis::CatmullRom.check_nodes(nodes.len())?;
    let (index, u) = segment_parameter(nodes.len() - 3, t);
    let segment = CatmullRomSegment::new(
        nodes[index],
        nodes[index + 1],
        nodes[index + 2],
        nodes[index + 3],
    );
    Ok(segment.eval(u))
}

/// Map a global parameter onto (segment index, local parameter).
/// The last segment absorbs t = 1 so that it evaluates to its end node.
fn segment_parameter<F: Float>(sections: usize, t: F) -> (usize, F) {
    let t = t.max(F::zero()).min(F::one());
    let scaled = t * scalar::<F, _>(sections);
    let index = scaled
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(sections - 1);
    (index, scaled - scalar(index))
}

/// Turn an open node list into a closed loop.
///
/// The first and last node are dropped as stale control points, the loop is closed by
/// repeating the first real node and two new control points are synthesized across the
/// seam: each one lies along the neighbouring edge at the length of the opposite edge,
/// which keeps the tangent continuous where the loop meets itself.
///
/// On error the nodes are left untouched.
pub fn close<P: PointNorm>(nodes: &mut Vec<P>) -> Result<(), SplineError> {
    Basis::CatmullRom.check_nodes(nodes.len())?;

    let mut closed: Vec<P> = nodes[1..nodes.len() - 1].to_vec();
    let first = closed[0];
    if closed[closed.len() - 1] != first {
        closed.push(first);
    }

    let next = closed[1];
    let previous = closed[closed.len() - 2];
    let to_next = distance(first, next);
    let to_previous = distance(first, previous);
    let eps: P::Scalar = scalar(EPSILON);
    if to_next <= eps || to_previous <= eps {
        return Err(SplineError::DegenerateSegment);
    }

    let leading = first + (previous - first) * (to_next / to_previous);
    let trailing = first + (next - first) * (to_previous / to_next);
    closed.insert(0, leading);
    closed.push(trailing);

    *nodes = closed;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point3, EPSILON};

    #[test]
    fn passes_through_inner_nodes() {
        let nodes = [
            Point3::new([-2.0, 0.0, 0.0]),
            Point3::new([0.0, 0.0, 0.0]),
            Point3::new([3.0, 4.0, 0.0]),
            Point3::new([6.0, 0.0, 1.0]),
            Point3::new([9.0, 2.0, 0.0]),
            Point3::new([12.0, 0.0, 0.0]),
        ];
        // three sections, so the inner nodes sit at t = 0, 1/3, 2/3, 1
        for (i, node) in nodes[1..nodes.len() - 1].iter().enumerate() {
            let t = i as f64 / 3.0;
            let p = eval(&nodes, t).unwrap();
            assert!((p - *node).squared_norm() < EPSILON, "node {} at t={}", i + 1, t);
        }
    }

    #[test]
    fn evenly_spaced_collinear_nodes_are_linear() {
        let nodes = [
            Point3::new([-1.0, 0.0, 0.0]),
            Point3::new([0.0, 0.0, 0.0]),
            Point3::new([1.0, 0.0, 0.0]),
            Point3::new([2.0, 0.0, 0.0]),
        ];
        let p = eval(&nodes, 0.25).unwrap();
        assert!((p - Point3::new([0.25, 0.0, 0.0])).squared_norm() < EPSILON);
    }

    #[test]
    fn clamps_out_of_range() {
        let nodes = [
            Point3::new([-1.0, 0.0, 0.0]),
            Point3::new([0.0, 0.0, 0.0]),
            Point3::new([1.0, 1.0, 0.0]),
            Point3::new([2.0, 0.0, 0.0]),
        ];
        assert_eq!(eval(&nodes, -3.0).unwrap(), eval(&nodes, 0.0).unwrap());
        assert_eq!(eval(&nodes, 7.0).unwrap(), eval(&nodes, 1.0).unwrap());
    }

    #[test]
    fn too_few_nodes() {
        let nodes = [Point3::new([0.0, 0.0, 0.0]), Point3::new([1.0, 0.0, 0.0])];
        assert!(matches!(
            eval(&nodes, 0.5),
            Err(SplineError::TooFewNodes { found: 2, .. })
        ));
    }

    #[test]
    fn close_synthesizes_seam_controls() {
        let mut nodes = vec![
            Point3::new([-1.0, -1.0, 0.0]),
            Point3::new([0.0, 0.0, 0.0]),
            Point3::new([4.0, 0.0, 0.0]),
            Point3::new([4.0, 2.0, 0.0]),
            Point3::new([5.0, 5.0, 0.0]),
        ];
        close(&mut nodes).unwrap();

        // [leading, 0, (4,0), (4,2), 0, trailing]
        assert_eq!(nodes.len(), 6);
        assert_eq!(nodes[1], nodes[4]);

        let origin = Point3::new([0.0, 0.0, 0.0]);
        // leading control points towards the node before the seam, at the length of the first edge
        let leading = nodes[0];
        assert!((distance(origin, leading) - 4.0).abs() < EPSILON);
        assert!((leading[0] - leading[1] * 2.0).abs() < EPSILON);
        // trailing control points towards the node after the seam, at the length of the last edge
        let trailing = nodes[5];
        assert!((distance(origin, trailing) - 20f64.sqrt()).abs() < EPSILON);
        assert!(trailing[1].abs() < EPSILON);
    }

    #[test]
    fn close_rejects_coincident_seam() {
        let mut nodes = vec![
            Point3::new([-1.0, 0.0, 0.0]),
            Point3::new([1.0, 1.0, 0.0]),
            Point3::new([1.0, 1.0, 0.0]),
            Point3::new([2.0, 0.0, 0.0]),
        ];
        let before = nodes.clone();
        assert_eq!(close(&mut nodes), Err(SplineError::DegenerateSegment));
        assert_eq!(nodes, before);
    }
}
