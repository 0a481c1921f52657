//! Views into a point storage
use super::{FixedPoint, ParallelPointStorage};
use crate::{
    traits::Point as PointTrait,
    types::{RealScalar, StorageError},
};
use std::{
    fmt::{Debug, Formatter},
    ops::{Add, AddAssign, Index, Sub, SubAssign},
};

/// A cursor to one point of a [`ParallelPointStorage`].
///
/// A view is a borrowed storage together with a point index. The index may be out of
/// range, in which case the view is invalid: it can still be moved and compared, but
/// reading its coordinates fails.
#[derive(Clone, Copy)]
pub struct PointView<'a, T: RealScalar, const N: usize> {
    owner: &'a ParallelPointStorage<T, N>,
    index: usize,
}

impl<'a, T: RealScalar, const N: usize> PointView<'a, T, N> {
    pub(crate) fn new(owner: &'a ParallelPointStorage<T, N>, index: usize) -> Self {
        Self { owner, index }
    }

    /// The storage this view points into
    pub fn owner(&self) -> &'a ParallelPointStorage<T, N> {
        self.owner
    }

    /// The index of the point
    pub fn index(&self) -> usize {
        self.index
    }

    /// Does this view refer to a stored point?
    pub fn is_valid(&self) -> bool {
        self.index < self.owner.size()
    }

    /// Move to the next point.
    pub fn increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Move to the previous point.
    ///
    /// The first point stays where it is. An invalid view moves to the last point, or stays
    /// invalid if the storage is empty.
    pub fn decrement(&mut self) -> &mut Self {
        if self.is_valid() {
            if self.index > 0 {
                self.index -= 1;
            }
        } else if !self.owner.is_empty() {
            self.index = self.owner.size() - 1;
        }
        self
    }

    /// Move to the point at `index`.
    pub fn slide(&mut self, index: usize) -> &mut Self {
        self.index = index;
        self
    }

    /// Read coordinate `coord`, reporting an error if the view is invalid.
    pub fn try_coord(&self, coord: usize) -> Result<T, StorageError> {
        self.owner.value(coord, self.index).copied()
    }

    /// Copy the point out of the storage, reporting an error if the view is invalid.
    pub fn to_point(&self) -> Result<FixedPoint<T, N>, StorageError> {
        if !self.is_valid() {
            return Err(StorageError::OutOfRange {
                index: self.index,
                size: self.owner.size(),
            });
        }
        Ok(FixedPoint::from_point(self))
    }
}

impl<T: RealScalar, const N: usize> Debug for PointView<'_, T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_struct("PointView")
            .field("index", &self.index)
            .field("size", &self.owner.size())
            .finish()
    }
}

impl<T: RealScalar, const N: usize> PartialEq for PointView<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.owner, other.owner)
            && if self.is_valid() {
                other.is_valid() && self.index == other.index
            } else {
                !other.is_valid()
            }
    }
}

impl<T: RealScalar, const N: usize> Eq for PointView<'_, T, N> {}

impl<T: RealScalar, const N: usize> AddAssign<usize> for PointView<'_, T, N> {
    fn add_assign(&mut self, delta: usize) {
        self.index = self.index.saturating_add(delta);
    }
}

impl<T: RealScalar, const N: usize> SubAssign<usize> for PointView<'_, T, N> {
    fn sub_assign(&mut self, delta: usize) {
        self.index = self.index.saturating_sub(delta);
    }
}

impl<T: RealScalar, const N: usize> Add<usize> for PointView<'_, T, N> {
    type Output = Self;

    fn add(mut self, delta: usize) -> Self {
        self += delta;
        self
    }
}

impl<T: RealScalar, const N: usize> Sub<usize> for PointView<'_, T, N> {
    type Output = Self;

    fn sub(mut self, delta: usize) -> Self {
        self -= delta;
        self
    }
}

impl<T: RealScalar, const N: usize> Index<usize> for PointView<'_, T, N> {
    type Output = T;

    /// Panics if the view is invalid or `coord >= N`. Use [`PointView::try_coord`] for a
    /// reported error.
    fn index(&self, coord: usize) -> &T {
        // Every column holds exactly `size()` values, so the slice bounds check is the
        // validity check.
        &self.owner.coordinates(coord)[self.index]
    }
}

impl<T: RealScalar, const N: usize> PointTrait<N> for PointView<'_, T, N> {
    type T = T;

    fn coord(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: RealScalar, const N: usize> From<PointView<'_, T, N>> for FixedPoint<T, N> {
    fn from(view: PointView<'_, T, N>) -> Self {
        Self::from_point(&view)
    }
}

/// Iterator over the points of a storage
#[derive(Debug, Clone)]
pub struct PointIter<'a, T: RealScalar, const N: usize> {
    view: PointView<'a, T, N>,
}

impl<'a, T: RealScalar, const N: usize> PointIter<'a, T, N> {
    /// Create new
    pub fn new(start: PointView<'a, T, N>) -> Self {
        Self { view: start }
    }
}

impl<'a, T: RealScalar, const N: usize> Iterator for PointIter<'a, T, N> {
    type Item = PointView<'a, T, N>;

    fn next(&mut self) -> Option<PointView<'a, T, N>> {
        if self.view.is_valid() {
            let current = self.view;
            self.view.increment();
            Some(current)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.owner.size().saturating_sub(self.view.index);
        (remaining, Some(remaining))
    }
}

impl<T: RealScalar, const N: usize> ExactSizeIterator for PointIter<'_, T, N> {}

#[cfg(test)]
mod test {
    use super::*;

    fn example_storage() -> ParallelPointStorage<f64, 3> {
        let mut s = ParallelPointStorage::new();
        s.add(&[0.0, 1.0, 2.0]).unwrap();
        s.add(&[3.0, 4.0, 5.0]).unwrap();
        s.add(&[6.0, 7.0, 8.0]).unwrap();
        s
    }

    #[test]
    fn test_read_coordinates() {
        let s = example_storage();
        let v = s.view(1);
        assert!(v.is_valid());
        assert_eq!(v[0], 3.0);
        assert_eq!(v[2], 5.0);
        assert_eq!(v.coord(1), 4.0);
        assert_eq!(v.try_coord(2).unwrap(), 5.0);
        assert_eq!(FixedPoint::from(v), FixedPoint::new([3.0, 4.0, 5.0]));
    }

    #[test]
    fn test_invalid_reads_are_reported() {
        let s = example_storage();
        assert!(matches!(
            s.view(3).try_coord(0),
            Err(StorageError::OutOfRange { index: 3, size: 3 })
        ));
        assert!(matches!(
            s.view(0).try_coord(3),
            Err(StorageError::InvalidCoordinate { coord: 3, dim: 3 })
        ));
        assert!(s.end().to_point().is_err());
        assert!(s.point(7).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_invalid_view() {
        let s = example_storage();
        let _ = s.end()[0];
    }

    #[test]
    fn test_reads_match_columns() {
        let s = example_storage();
        for v in &s {
            for dim in 0..3 {
                assert_eq!(v[dim], s.coordinates(dim)[v.index()]);
                assert_eq!(v.coord(dim), v.try_coord(dim).unwrap());
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_index_invalid_coordinate() {
        let s = example_storage();
        let _ = s.begin()[3];
    }

    #[test]
    fn test_arithmetic() {
        let s = example_storage();
        let mut v = s.begin();
        v.increment();
        assert_eq!(v.index(), 1);
        v += 5;
        assert!(!v.is_valid());
        v -= 100;
        assert_eq!(v.index(), 0);
        v.decrement();
        assert_eq!(v.index(), 0);

        let w = v + 2;
        assert_eq!(v.index(), 0);
        assert_eq!(w.index(), 2);
        let u = w - 1;
        assert_eq!(w.index(), 2);
        assert_eq!(u.index(), 1);
        assert_eq!((u - 10).index(), 0);

        v.slide(2).increment();
        assert!(!v.is_valid());
        assert_eq!(v, s.end());
    }

    #[test]
    fn test_decrement_from_end() {
        let s = example_storage();
        let mut v = s.end();
        v.decrement();
        assert_eq!(v.index(), 2);
        assert!(v.is_valid());

        let empty = ParallelPointStorage::<f64, 3>::new();
        let mut v = empty.end();
        v.decrement();
        assert!(!v.is_valid());
        assert_eq!(v, empty.begin());
    }

    #[test]
    fn test_end_saturates() {
        let s = example_storage();
        let mut v = s.end();
        v.increment();
        v += 10;
        assert_eq!(v.index(), usize::MAX);
    }

    #[test]
    fn test_equality() {
        let s = example_storage();
        let t = example_storage();
        assert_eq!(s.view(1), s.begin() + 1);
        assert_ne!(s.view(1), s.view(2));
        assert_ne!(s.view(1), t.view(1));
        assert_eq!(s.view(3), s.end());
        assert_eq!(s.view(17), s.end());
        assert_ne!(s.view(2), s.end());
        assert_ne!(s.end(), t.end());
    }

    #[test]
    fn test_views_alias_the_storage() {
        let s = example_storage();
        let a = s.view(2);
        let mut b = s.end();
        b.decrement();
        assert!(std::ptr::eq(&a[1], &b[1]));
        assert!(std::ptr::eq(&a[1], &s.coordinates(1)[2]));
    }

    #[test]
    fn test_iter() {
        let s = example_storage();
        let iter = s.iter();
        assert_eq!(iter.len(), 3);
        let firsts = iter.map(|v| v[0]).collect::<Vec<_>>();
        assert_eq!(firsts, [0.0, 3.0, 6.0]);

        let mut count = 0;
        for (i, v) in (&s).into_iter().enumerate() {
            assert_eq!(v.index(), i);
            count += 1;
        }
        assert_eq!(count, s.size());
    }
}
