//! Point
use crate::types::RealScalar;

/// A point with `N` coordinates that can be read by index.
///
/// This is the common contract of materialised points and of views into a
/// structure-of-arrays storage, so that both can be handed to the same metric.
pub trait Point<const N: usize> {
    /// Scalar type
    type T: RealScalar;

    /// Return the dimension of the point.
    fn dim(&self) -> usize {
        N
    }

    /// Get coordinate `index` of the point.
    ///
    /// Panics if `index >= N` or if the point cannot be read.
    fn coord(&self, index: usize) -> Self::T;

    /// Get the coordinates of the point.
    fn coords(&self, data: &mut [Self::T]) {
        debug_assert!(data.len() == N);
        for (i, value) in data.iter_mut().enumerate() {
            *value = self.coord(i);
        }
    }
}

impl<T: RealScalar, const N: usize> Point<N> for [T; N] {
    type T = T;

    fn coord(&self, index: usize) -> T {
        self[index]
    }

    fn coords(&self, data: &mut [T]) {
        data.copy_from_slice(self);
    }
}

impl<const N: usize, P: Point<N> + ?Sized> Point<N> for &P {
    type T = P::T;

    fn coord(&self, index: usize) -> P::T {
        (**self).coord(index)
    }

    fn coords(&self, data: &mut [P::T]) {
        (**self).coords(data)
    }
}
