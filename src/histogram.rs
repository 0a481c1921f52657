//! Histogram of distances
use crate::types::RealScalar;

/// Counts of distances in `B` equal-width buckets over `[0, 1)`.
///
/// Bucket `i` has the threshold `i / B`. A distance is counted in the highest bucket whose
/// threshold it strictly exceeds. Distances of 1 or more land in the top bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceHistogram<T: RealScalar, const B: usize> {
    counts: [usize; B],
    thresholds: [T; B],
}

impl<T: RealScalar, const B: usize> DistanceHistogram<T, B> {
    /// Create an empty histogram
    pub fn new() -> Self {
        let buckets = T::from(B).unwrap();
        Self {
            counts: [0; B],
            thresholds: std::array::from_fn(|i| T::from(i).unwrap() / buckets),
        }
    }

    /// Count a distance, returning the bucket it was counted in.
    ///
    /// Since the lowest threshold is 0 and the comparison is strict, a distance of exactly 0
    /// is not counted in any bucket, so the self-distance of a point never contributes.
    /// Negative and NaN distances are not counted either.
    pub fn consume(&mut self, distance: T) -> Option<usize> {
        let bucket = self.thresholds.iter().rposition(|&t| distance > t)?;
        self.counts[bucket] += 1;
        Some(bucket)
    }

    /// Reset every count to zero.
    pub fn clear(&mut self) {
        self.counts = [0; B];
    }

    /// The counts of every bucket
    pub fn counts(&self) -> &[usize; B] {
        &self.counts
    }

    /// The count of bucket `index`
    pub fn count(&self, index: usize) -> usize {
        self.counts[index]
    }

    /// The lower threshold of every bucket
    pub fn thresholds(&self) -> &[T; B] {
        &self.thresholds
    }

    /// The number of distances that were counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl<T: RealScalar, const B: usize> Default for DistanceHistogram<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar, const B: usize> Extend<T> for DistanceHistogram<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, distances: I) {
        for d in distances {
            self.consume(d);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_thresholds() {
        let h = DistanceHistogram::<f64, 4>::new();
        assert_eq!(h.thresholds(), &[0.0, 0.25, 0.5, 0.75]);
        assert_eq!(h.counts(), &[0; 4]);

        let h = DistanceHistogram::<f32, 5>::new();
        assert_eq!(h.thresholds()[1], 1.0 / 5.0);
    }

    #[test]
    fn test_many_thresholds() {
        let h = DistanceHistogram::<f32, 4096>::new();
        for (i, t) in h.thresholds().iter().enumerate() {
            assert_eq!(*t, i as f32 / 4096.0);
        }
        let h = DistanceHistogram::<f64, 1000>::new();
        assert_eq!(h.thresholds()[999], 999.0 / 1000.0);
    }

    #[test]
    fn test_bucket_selection() {
        let mut h = DistanceHistogram::<f64, 4>::new();
        assert_eq!(h.consume(0.1), Some(0));
        assert_eq!(h.consume(0.25), Some(0));
        assert_eq!(h.consume(0.26), Some(1));
        assert_eq!(h.consume(0.5), Some(1));
        assert_eq!(h.consume(0.7), Some(2));
        assert_eq!(h.consume(0.99), Some(3));
        assert_eq!(h.consume(1.0), Some(3));
        assert_eq!(h.consume(12.0), Some(3));
        assert_eq!(h.counts(), &[2, 2, 1, 3]);
        assert_eq!(h.total(), 8);
    }

    #[test]
    fn test_not_counted() {
        let mut h = DistanceHistogram::<f64, 4>::new();
        assert_eq!(h.consume(0.0), None);
        assert_eq!(h.consume(-0.5), None);
        assert_eq!(h.consume(f64::NAN), None);
        assert_eq!(h.total(), 0);
    }

    #[test]
    fn test_clear_and_replay() {
        let distances = [0.3, 0.9, 0.0, 0.6, 1.4, 0.05, 0.75, 0.76];
        let mut fresh = DistanceHistogram::<f64, 4>::new();
        fresh.extend(distances);

        let mut reused = DistanceHistogram::<f64, 4>::new();
        reused.extend([0.5, 0.5, 0.9]);
        reused.clear();
        assert_eq!(reused.total(), 0);
        reused.extend(distances);
        assert_eq!(reused, fresh);
        assert_eq!(fresh.count(2), 2);
    }

    #[test]
    fn test_single_bucket() {
        let mut h = DistanceHistogram::<f32, 1>::default();
        h.extend([0.1, 0.9, 3.0, 0.0]);
        assert_eq!(h.counts(), &[3]);
    }

    #[test]
    fn test_no_buckets() {
        let mut h = DistanceHistogram::<f64, 0>::new();
        assert_eq!(h.consume(0.5), None);
        assert_eq!(h.total(), 0);
    }
}
