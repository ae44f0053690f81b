//! The curve families a solver can interpolate with.

use core::fmt;

use crate::error::SplineError;

/// Selects how nodes are turned into curve points. Fixed for the lifetime of a solver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Basis {
    /// Uniform Catmull-Rom through every node except the first and last,
    /// which act as control points.
    CatmullRom,
    /// A single cubic Bézier segment over exactly four nodes.
    CubicBezier,
    /// A polyline through every node.
    StraightLine,
}

impl Basis {
    /// Smallest node count the basis can evaluate.
    pub const fn min_nodes(self) -> usize {
        match self {
            Basis::CatmullRom | Basis::CubicBezier => 4,
            Basis::StraightLine => 2,
        }
    }

    /// Fail with a descriptive error if `found` nodes cannot form a curve of this basis.
    pub fn check_nodes(self, found: usize) -> Result<(), SplineError> {
        let required = self.min_nodes();
        match self {
            Basis::CubicBezier if found != required => Err(SplineError::WrongNodeCount {
                basis: self,
                required,
                found,
            }),
            Basis::CatmullRom | Basis::StraightLine if found < required => {
                Err(SplineError::TooFewNodes {
                    basis: self,
                    required,
                    found,
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Basis::CatmullRom => "Catmull-Rom",
            Basis::CubicBezier => "cubic Bézier",
            Basis::StraightLine => "straight-line",
        };
        f.write_str(name)
    }
}
