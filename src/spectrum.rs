//! All-pairs distance spectra
//!
//! Each function feeds the distance between every unordered pair of points into a
//! histogram. The first point of a pair is copied into a [`FixedPoint`] once per outer
//! iteration; the second is read in place through the layout being measured.
use crate::{
    geometry::{FixedPoint, ParallelPointStorage},
    histogram::DistanceHistogram,
    traits::DistanceMetric,
    types::RealScalar,
};

/// Histogram the pairwise distances of points stored contiguously, one point after another.
///
/// Returns the number of distances that were computed.
pub fn consume_pairs<M, T, const N: usize, const B: usize>(
    points: &[FixedPoint<T, N>],
    histogram: &mut DistanceHistogram<T, B>,
) -> usize
where
    M: DistanceMetric<N>,
    T: RealScalar,
{
    let mut evaluations = 0;
    for (i, p0) in points.iter().enumerate() {
        let p0 = *p0;
        for p1 in &points[i + 1..] {
            histogram.consume(M::distance::<T, _, _>(&p0, p1));
            evaluations += 1;
        }
    }
    evaluations
}

/// Histogram the pairwise distances of points held in a [`ParallelPointStorage`].
///
/// Returns the number of distances that were computed.
pub fn consume_storage_pairs<M, T, const N: usize, const B: usize>(
    storage: &ParallelPointStorage<T, N>,
    histogram: &mut DistanceHistogram<T, B>,
) -> usize
where
    M: DistanceMetric<N>,
    T: RealScalar,
{
    let mut evaluations = 0;
    for view in storage {
        let p0 = FixedPoint::from(view);
        let mut p1 = view + 1;
        while p1.is_valid() {
            histogram.consume(M::distance::<T, _, _>(&p0, &p1));
            evaluations += 1;
            p1.increment();
        }
    }
    evaluations
}
