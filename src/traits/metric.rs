//! Distance metric
use super::Point;
use crate::types::RealScalar;

/// A strategy for computing the Euclidean distance between two points of dimension `N`.
pub trait DistanceMetric<const N: usize> {
    /// Compute the distance between `p0` and `p1` in the result type `R`.
    ///
    /// The two points may be of different types; each coordinate is converted to `R`
    /// before it is subtracted.
    fn distance<R, P0, P1>(p0: &P0, p1: &P1) -> R
    where
        R: RealScalar + From<P0::T> + From<P1::T>,
        P0: Point<N>,
        P1: Point<N>;
}
