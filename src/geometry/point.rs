//! Point
use crate::{traits::Point as PointTrait, types::RealScalar};
use std::ops::{Index, IndexMut};

/// A point with exactly `N` coordinates, stored inline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPoint<T: RealScalar, const N: usize> {
    coordinates: [T; N],
}

impl<T: RealScalar, const N: usize> FixedPoint<T, N> {
    /// Create new
    pub fn new(coordinates: [T; N]) -> Self {
        Self { coordinates }
    }

    /// The origin
    pub fn zero() -> Self {
        Self::new([T::zero(); N])
    }

    /// Copy the coordinates of any other point of the same dimension.
    pub fn from_point<P: PointTrait<N, T = T>>(other: &P) -> Self {
        let mut coordinates = [T::zero(); N];
        other.coords(&mut coordinates);
        Self { coordinates }
    }

    /// The coordinates
    pub fn as_slice(&self) -> &[T] {
        &self.coordinates
    }

    /// Consume the point, returning its coordinates
    pub fn into_inner(self) -> [T; N] {
        self.coordinates
    }
}

impl<T: RealScalar, const N: usize> Default for FixedPoint<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RealScalar, const N: usize> From<[T; N]> for FixedPoint<T, N> {
    fn from(coordinates: [T; N]) -> Self {
        Self::new(coordinates)
    }
}

impl<T: RealScalar, const N: usize> Index<usize> for FixedPoint<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.coordinates[index]
    }
}

impl<T: RealScalar, const N: usize> IndexMut<usize> for FixedPoint<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.coordinates[index]
    }
}

impl<T: RealScalar, const N: usize> PointTrait<N> for FixedPoint<T, N> {
    type T = T;

    fn coord(&self, index: usize) -> T {
        self.coordinates[index]
    }

    fn coords(&self, data: &mut [T]) {
        data.copy_from_slice(&self.coordinates);
    }
}
