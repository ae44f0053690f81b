use core::fmt::Debug;
use core::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::Float;

use super::point::{Point, PointNorm};

/// Point with dimensions of constant generic size N and of generic type T
/// (Implemented as Newtype Pattern on an array
/// see book or https://www.worthe-it.co.za/blog/2020-10-31-newtype-pattern-in-rust.html)
/// This type only interacts with the library through
/// the point trait, so you are free to use your own
/// Point/Coord/Vec structures instead by implementing the (small) trait
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointN<T, const N: usize>([T; N]);

/// The three dimensional point most paths are built from.
pub type Point3<T> = PointN<T, 3>;

impl<T, const N: usize> PointN<T, N> {
    pub fn new(array: [T; N]) -> Self {
        PointN(array)
    }

    /// Borrow the components as an array.
    pub fn components(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> From<[T; N]> for PointN<T, N> {
    fn from(array: [T; N]) -> Self {
        PointN(array)
    }
}

/// Initialize with the Default value for the underlying type
impl<T: Default + Copy, const N: usize> Default for PointN<T, N> {
    fn default() -> Self {
        PointN([T::default(); N])
    }
}

impl<T, const N: usize> Add for PointN<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] + other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Sub for PointN<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] - other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Mul<T> for PointN<T, N>
where
    // scaling multiplies every component T * T => T
    T: Mul<T, Output = T> + Copy,
{
    type Output = PointN<T, N>;

    fn mul(self, rhs: T) -> PointN<T, N> {
        let mut res = self;
        for component in res.0.iter_mut() {
            *component = *component * rhs;
        }
        res
    }
}

impl<T, const N: usize> Index<usize> for PointN<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for PointN<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for PointN<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<Self::Item, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.0)
    }
}

impl<T, const N: usize> Point for PointN<T, N>
where
    T: Float + Default + Debug,
{
    type Scalar = T;
    const DIM: usize = N;
}

impl<T, const N: usize> PointNorm for PointN<T, N>
where
    T: Float + Default + Debug,
{
    fn squared_norm(&self) -> T {
        self.0
            .iter()
            .fold(T::zero(), |sum, component| sum + *component * *component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{distance, lerp};
    use crate::EPSILON;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Point3::new([1.0, 2.0, 3.0]);
        let b = Point3::new([0.5, -2.0, 4.0]);

        assert_eq!(a + b, Point3::new([1.5, 0.0, 7.0]));
        assert_eq!(a - b, Point3::new([0.5, 4.0, -1.0]));
        assert_eq!(a * 2.0, Point3::new([2.0, 4.0, 6.0]));
        assert_eq!(b[2], 4.0);
    }

    #[test]
    fn distance_is_pythagorean() {
        // 3-4-5 triangle lifted into 3D
        let a: Point3<f64> = [0.0, 0.0, 1.0].into();
        let b: Point3<f64> = [3.0, 4.0, 1.0].into();
        assert!((distance(a, b) - 5.0).abs() < EPSILON);
        assert!((distance(b, a) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = PointN::new([0f32, 1.77]);
        let b = PointN::new([4.3f32, 3.0]);
        assert_eq!(lerp(a, b, 0.0), a);
        assert!((lerp(a, b, 1.0) - b).squared_norm() < 1e-10);

        let mid = lerp(a, b, 0.5);
        assert!(((mid - a).squared_norm() - (mid - b).squared_norm()).abs() < 1e-6);
    }
}
