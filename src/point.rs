//! Point traits used by every basis and lookup table.

use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::{Float, NumCast, ToPrimitive};

/// Trait defined over generic points P which themselves are generic over a scalar.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy.
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
{
    type Scalar: Float + Default + Debug;
    const DIM: usize;
}

/// Points that can measure their own Euclidean length.
pub trait PointNorm: Point {
    /// Squared L2 norm of the point interpreted as a vector.
    fn squared_norm(&self) -> Self::Scalar;
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance<P: PointNorm>(a: P, b: P) -> P::Scalar {
    (a - b).squared_norm().sqrt()
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1).
#[inline]
pub fn lerp<P: Point>(a: P, b: P, t: P::Scalar) -> P {
    a + (b - a) * t
}

/// Convert a primitive number into the scalar type of a point.
/// Every finite f64/usize fits into f32 or f64, anything else maps to NaN.
#[inline]
pub(crate) fn scalar<F: Float, V: ToPrimitive>(value: V) -> F {
    <F as NumCast>::from(value).unwrap_or_else(F::nan)
}
