//! Constant-speed sampling along Catmull-Rom, cubic Bézier and polyline paths.
//!
//! Curves are usually parameterized so that equal steps of `t` cover unequal distances:
//! an object moved along `curve.eval(t)` speeds up on straights and crawls through bends.
//! A [`SplineSolver`] measures its path once into an arc-length lookup table and then
//! answers "where am I after travelling this fraction of the path" in constant time per
//! table bracket.
//!
//! The crate is `#![no_std]` and only needs an allocator. Points are generic: bring your
//! own vector type by implementing [`Point`] and [`PointNorm`], or use [`PointN`].
//!
//! ```rust
//! use glide::{Point3, SplineSolver};
//!
//! let mut solver = SplineSolver::straight_line(vec![
//!     Point3::new([0.0, 0.0, 0.0]),
//!     Point3::new([10.0, 0.0, 0.0]),
//!     Point3::new([10.0, 10.0, 0.0]),
//! ]);
//! solver.build_path().unwrap();
//!
//! assert_eq!(solver.path_length(), 20.0);
//! assert_eq!(solver.point_on_path(0.5).unwrap(), Point3::new([10.0, 0.0, 0.0]));
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod basis;
pub mod catmull_rom;
pub mod cubic_bezier;
pub mod error;
pub mod line;
pub mod point;
pub mod point_generic;
pub mod solver;
pub mod spline;
pub mod table;

pub use basis::Basis;
pub use catmull_rom::CatmullRomSegment;
pub use cubic_bezier::CubicBezier;
pub use error::SplineError;
pub use line::LineSegment;
pub use point::{distance, lerp, Point, PointNorm};
pub use point_generic::{Point3, PointN};
pub use solver::{SplineSolver, DEFAULT_SUBDIVISIONS_PER_NODE};
pub use spline::Spline;
pub use table::{ArcLengthTable, ArcSample, SegmentTable};

/// Tolerance below which lengths are treated as zero.
pub const EPSILON: f64 = 1e-10;

#[cfg(test)]
mod tests {
    use super::*;

    /// Every single-segment curve starts and ends on its defining points.
    fn assert_endpoints<S: Spline<Point3<f64>>>(curve: &S, start: Point3<f64>, end: Point3<f64>) {
        assert!((Spline::eval(curve, 0.0) - start).squared_norm() < EPSILON);
        assert!((Spline::eval(curve, 1.0) - end).squared_norm() < EPSILON);
    }

    #[test]
    fn spline_endpoints() {
        let a = Point3::new([0.0, 0.0, 0.0]);
        let b = Point3::new([1.0, 2.0, 0.0]);
        let c = Point3::new([3.0, -1.0, 1.0]);
        let d = Point3::new([4.0, 0.0, 0.0]);

        assert_endpoints(&LineSegment::new(a, d), a, d);
        assert_endpoints(&CubicBezier::new(a, b, c, d), a, d);
        assert_endpoints(&CatmullRomSegment::new(a, b, c, d), b, c);
    }
}
