//! Constant-speed path solver.
//!
//! A [`SplineSolver`] owns a node list and a [`Basis`]. After [`SplineSolver::build_path`]
//! it can sample the curve either by raw parameter ([`SplineSolver::point`]) or by
//! fraction of travelled distance ([`SplineSolver::point_on_path`]), the latter moving
//! at constant speed along the curve.
//!
//! Every node edit bumps a generation counter. Queries that need the lookup table fail
//! with [`SplineError::StaleTable`] until the path is rebuilt; the solver never rebuilds
//! on its own.
//!
//! # Examples
//! ```rust
//! use glide::{Point3, SplineSolver};
//!
//! let mut solver = SplineSolver::catmull_rom(vec![
//!     Point3::new([-5.0, 0.0, 0.0]),
//!     Point3::new([0.0, 0.0, 0.0]),
//!     Point3::new([5.0, 5.0, 0.0]),
//!     Point3::new([10.0, 0.0, 0.0]),
//!     Point3::new([15.0, 0.0, 0.0]),
//! ])
//! .with_subdivisions(20);
//!
//! solver.build_path().unwrap();
//! let start = solver.point_on_path(0.0).unwrap();
//! let halfway = solver.point_on_path(0.5).unwrap();
//! let end = solver.point_on_path(1.0).unwrap();
//! assert_eq!(start, Point3::new([0.0, 0.0, 0.0]));
//! assert_eq!(end, Point3::new([10.0, 0.0, 0.0]));
//! # let _ = halfway;
//! ```

use alloc::vec::Vec;

use num_traits::{Float, One, Zero};

use super::basis::Basis;
use super::catmull_rom;
use super::cubic_bezier::CubicBezier;
use super::error::SplineError;
use super::line::{self, LineSegment};
use super::point::{distance, lerp, PointNorm};
use super::spline::Spline;
use super::table::{ArcLengthTable, SegmentTable};

/// Lookup table samples per node, unless configured with [`SplineSolver::with_subdivisions`].
/// Higher values take longer to build and query but track constant speed more closely.
pub const DEFAULT_SUBDIVISIONS_PER_NODE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
enum PathTable<F: Default> {
    ArcLength(ArcLengthTable<F>),
    Segments(SegmentTable<F>),
    /// A two node polyline, interpolated directly.
    Direct,
}

#[derive(Clone, Debug, PartialEq)]
struct BuiltTable<F: Default> {
    generation: u64,
    table: PathTable<F>,
}

#[derive(Clone, Debug)]
pub struct SplineSolver<P>
where
    P: PointNorm,
{
    basis: Basis,
    nodes: Vec<P>,
    subdivisions: usize,
    path_length: P::Scalar,
    generation: u64,
    built: Option<BuiltTable<P::Scalar>>,
    closed: bool,
}

impl<P> SplineSolver<P>
where
    P: PointNorm,
{
    pub fn new(basis: Basis, nodes: Vec<P>) -> Self {
        SplineSolver {
            basis,
            nodes,
            subdivisions: DEFAULT_SUBDIVISIONS_PER_NODE,
            path_length: P::Scalar::zero(),
            generation: 0,
            built: None,
            closed: false,
        }
    }

    pub fn catmull_rom(nodes: Vec<P>) -> Self {
        Self::new(Basis::CatmullRom, nodes)
    }

    pub fn cubic_bezier(nodes: Vec<P>) -> Self {
        Self::new(Basis::CubicBezier, nodes)
    }

    pub fn straight_line(nodes: Vec<P>) -> Self {
        Self::new(Basis::StraightLine, nodes)
    }

    /// Set how many lookup table samples are taken per node. Zero is raised to one.
    /// Invalidates any table built with the previous setting.
    pub fn with_subdivisions(mut self, subdivisions: usize) -> Self {
        self.subdivisions = subdivisions.max(1);
        self.touch();
        self
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn nodes(&self) -> &[P] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Length of the path as of the last successful [`SplineSolver::build_path`].
    pub fn path_length(&self) -> P::Scalar {
        self.path_length
    }

    /// True once [`SplineSolver::close_path`] has turned a Catmull-Rom path into a loop.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True if a lookup table exists and matches the current nodes.
    pub fn is_built(&self) -> bool {
        self.fresh_table().is_ok()
    }

    /// The dense table of a fresh Catmull-Rom or Bézier build.
    pub fn arc_length_table(&self) -> Option<&ArcLengthTable<P::Scalar>> {
        match self.fresh_table() {
            Ok(PathTable::ArcLength(table)) => Some(table),
            _ => None,
        }
    }

    /// The segment table of a fresh straight-line build over three or more nodes.
    pub fn segment_table(&self) -> Option<&SegmentTable<P::Scalar>> {
        match self.fresh_table() {
            Ok(PathTable::Segments(table)) => Some(table),
            _ => None,
        }
    }

    pub fn push_node(&mut self, node: P) {
        self.nodes.push(node);
        self.touch();
    }

    pub fn insert_node(&mut self, index: usize, node: P) -> Result<(), SplineError> {
        if index > self.nodes.len() {
            return Err(self.out_of_bounds(index));
        }
        self.nodes.insert(index, node);
        self.touch();
        Ok(())
    }

    pub fn remove_node(&mut self, index: usize) -> Result<P, SplineError> {
        if index >= self.nodes.len() {
            return Err(self.out_of_bounds(index));
        }
        let node = self.nodes.remove(index);
        self.touch();
        Ok(node)
    }

    pub fn set_node(&mut self, index: usize, node: P) -> Result<(), SplineError> {
        let len = self.nodes.len();
        let slot = self
            .nodes
            .get_mut(index)
            .ok_or(SplineError::IndexOutOfBounds { index, len })?;
        *slot = node;
        self.touch();
        Ok(())
    }

    /// Replace the whole node list. This is the only edit that reopens a closed path.
    pub fn set_nodes(&mut self, nodes: Vec<P>) {
        self.nodes = nodes;
        self.closed = false;
        self.touch();
    }

    /// Reverse the direction of travel. The path must be rebuilt afterwards.
    pub fn reverse_nodes(&mut self) {
        self.nodes.reverse();
        self.touch();
    }

    /// Close the path into a loop.
    ///
    /// - Catmull-Rom replaces the end control points with two synthesized seam controls.
    ///   The edit assumes the current end nodes are control points, so it can only run
    ///   once per node list; a second call fails with [`SplineError::AlreadyClosed`]
    ///   until [`SplineSolver::set_nodes`] installs a fresh list.
    /// - Straight-line appends a copy of the first node unless the path already ends there.
    /// - Cubic Bézier has a single segment and is left as is.
    pub fn close_path(&mut self) -> Result<(), SplineError> {
        self.basis.check_nodes(self.nodes.len())?;
        match self.basis {
            Basis::CatmullRom => {
                if self.closed {
                    return Err(SplineError::AlreadyClosed);
                }
                catmull_rom::close(&mut self.nodes)?;
                self.closed = true;
                self.touch();
                log::debug!("closed Catmull-Rom path, now {} nodes", self.nodes.len());
            }
            Basis::StraightLine => {
                let first = self.nodes[0];
                if self.nodes[self.nodes.len() - 1] != first {
                    self.nodes.push(first);
                    self.touch();
                    log::debug!("closed straight-line path, now {} nodes", self.nodes.len());
                }
            }
            Basis::CubicBezier => {}
        }
        Ok(())
    }

    /// Measure the path and build the lookup table used by the constant-speed queries.
    ///
    /// Curved bases sample the raw curve `node_count * subdivisions` times; polylines
    /// only measure their segments. Rebuilding unchanged nodes gives identical results.
    pub fn build_path(&mut self) -> Result<(), SplineError> {
        self.basis.check_nodes(self.nodes.len())?;

        let (table, path_length) = match self.basis {
            Basis::StraightLine if self.nodes.len() < 3 => {
                (PathTable::Direct, distance(self.nodes[0], self.nodes[1]))
            }
            Basis::StraightLine => {
                let table = SegmentTable::from_nodes(&self.nodes);
                let length = table.total_length();
                (PathTable::Segments(table), length)
            }
            Basis::CatmullRom | Basis::CubicBezier => {
                let steps = self.nodes.len().checked_mul(self.subdivisions).ok_or(
                    SplineError::TableTooLarge {
                        nodes: self.nodes.len(),
                        subdivisions: self.subdivisions,
                    },
                )?;
                let table = ArcLengthTable::sample(steps, |t| self.raw_point(t))?;
                let length = table.total_length();
                (PathTable::ArcLength(table), length)
            }
        };

        log::debug!(
            "built {} path: {} nodes, length {:?}",
            self.basis,
            self.nodes.len(),
            path_length
        );
        self.path_length = path_length;
        self.built = Some(BuiltTable {
            generation: self.generation,
            table,
        });
        Ok(())
    }

    /// Raw curve position at parameter `t`, clamped to [0, 1].
    ///
    /// Equal steps in `t` do not cover equal distances on curved bases. Polylines have
    /// no separate raw parameterization and answer like [`SplineSolver::point_on_path`].
    pub fn point(&self, t: P::Scalar) -> Result<P, SplineError> {
        let t = unit_parameter(t)?;
        match self.basis {
            Basis::StraightLine => self.polyline_point(t),
            Basis::CatmullRom | Basis::CubicBezier => self.raw_point(t),
        }
    }

    /// Position after travelling fraction `t` of the path length, clamped to [0, 1].
    pub fn point_on_path(&self, t: P::Scalar) -> Result<P, SplineError> {
        let t = unit_parameter(t)?;
        match self.basis {
            Basis::StraightLine => self.polyline_point(t),
            Basis::CatmullRom | Basis::CubicBezier => self.raw_point(self.time_on_path(t)?),
        }
    }

    /// The raw curve parameter reached after travelling fraction `t` of the path.
    /// For polylines the two coincide.
    pub fn time_on_path(&self, t: P::Scalar) -> Result<P::Scalar, SplineError> {
        let t = unit_parameter(t)?;
        let table = match self.fresh_table()? {
            PathTable::ArcLength(table) => table,
            PathTable::Segments(_) | PathTable::Direct => return Ok(t),
        };

        let one = P::Scalar::one();
        if t >= one {
            return Ok(one);
        }
        if t <= P::Scalar::zero() {
            return Ok(t);
        }
        Ok(table.time_at_length(self.path_length * t).unwrap_or(one))
    }

    /// Approximate number of markers to place between travelled fractions `t` and `t2`.
    ///
    /// This is a coarse heuristic, not a node count: it adds the rounded cumulative
    /// length at the table sample reaching `t` to the rounded cumulative length just
    /// before the sample reaching `t2`. Polylines have no dense table and report zero.
    pub fn total_points_between(&self, t: P::Scalar, t2: P::Scalar) -> Result<usize, SplineError> {
        let t = unit_parameter(t)?;
        let t2 = unit_parameter(t2)?;
        match self.fresh_table()? {
            PathTable::ArcLength(table) => Ok(table
                .approximate_points_between(self.path_length * t, self.path_length * t2)),
            PathTable::Segments(_) | PathTable::Direct => Ok(0),
        }
    }

    /// Handle lines between curve endpoints and their control points, for debug drawing.
    pub fn control_lines(&self) -> Vec<LineSegment<P>> {
        let nodes = &self.nodes;
        match self.basis {
            Basis::CatmullRom if nodes.len() >= 2 => alloc::vec![
                LineSegment::new(nodes[0], nodes[1]),
                LineSegment::new(nodes[nodes.len() - 1], nodes[nodes.len() - 2]),
            ],
            Basis::CubicBezier => CubicBezier::from_nodes(nodes)
                .map(|curve| curve.handles().to_vec())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn raw_point(&self, t: P::Scalar) -> Result<P, SplineError> {
        match self.basis {
            Basis::CatmullRom => catmull_rom::eval(&self.nodes, t),
            Basis::CubicBezier => Ok(CubicBezier::from_nodes(&self.nodes)?.eval(t)),
            Basis::StraightLine => self.polyline_point(t),
        }
    }

    fn polyline_point(&self, t: P::Scalar) -> Result<P, SplineError> {
        self.basis.check_nodes(self.nodes.len())?;
        if self.nodes.len() < 3 {
            return Ok(lerp(self.nodes[0], self.nodes[1], t));
        }
        match self.fresh_table()? {
            PathTable::Segments(table) => Ok(line::eval_polyline(&self.nodes, table, t)),
            PathTable::ArcLength(_) | PathTable::Direct => Err(SplineError::StaleTable),
        }
    }

    fn fresh_table(&self) -> Result<&PathTable<P::Scalar>, SplineError> {
        match &self.built {
            Some(built) if built.generation == self.generation => Ok(&built.table),
            _ => Err(SplineError::StaleTable),
        }
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn out_of_bounds(&self, index: usize) -> SplineError {
        SplineError::IndexOutOfBounds {
            index,
            len: self.nodes.len(),
        }
    }
}

/// Clamp a path parameter into [0, 1], rejecting NaN.
fn unit_parameter<F: Float>(t: F) -> Result<F, SplineError> {
    if t.is_nan() {
        return Err(SplineError::NonFiniteParameter);
    }
    Ok(t.max(F::zero()).min(F::one()))
}
