//! Counted loop over the coordinates
use crate::{
    traits::{DistanceMetric, Point},
    types::RealScalar,
};

/// Euclidean distance with a single accumulator and a counted loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeLoop;

impl<const N: usize> DistanceMetric<N> for RuntimeLoop {
    fn distance<R, P0, P1>(p0: &P0, p1: &P1) -> R
    where
        R: RealScalar + From<P0::T> + From<P1::T>,
        P0: Point<N>,
        P1: Point<N>,
    {
        let mut sum = R::zero();
        for i in 0..N {
            let a: R = p0.coord(i).into();
            let b: R = p1.coord(i).into();
            let diff = a - b;
            sum += diff * diff;
        }
        sum.sqrt()
    }
}
