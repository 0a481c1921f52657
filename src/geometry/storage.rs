//! Structure-of-arrays point storage
use super::{FixedPoint, PointIter, PointView};
use crate::{
    traits::Point as PointTrait,
    types::{RealScalar, StorageError},
};
use tracing::{debug, warn};

/// The smallest capacity a storage allocates.
pub const MIN_CAPACITY: usize = 8;

/// Capacities above this are rounded up to a multiple of [`PAGE_CAPACITY`] instead of
/// being grown geometrically.
const GEOMETRIC_LIMIT: usize = 2048;
const PAGE_CAPACITY: usize = 1024;

/// The capacity a storage with capacity `current` grows to in order to hold `target` points.
///
/// An empty storage allocates exactly `target` (but at least [`MIN_CAPACITY`]). A non-empty
/// storage rounds targets above 2048 up to the next multiple of 1024, and otherwise grows by
/// a factor of 1.5 until the target is met.
pub fn grown_capacity(current: usize, target: usize) -> usize {
    let target = target.max(MIN_CAPACITY);
    if current == 0 {
        target
    } else if current >= target {
        current
    } else if target > GEOMETRIC_LIMIT {
        target.div_ceil(PAGE_CAPACITY).saturating_mul(PAGE_CAPACITY)
    } else {
        let mut capacity = current;
        while capacity < target {
            capacity += (capacity >> 1).max(1);
        }
        capacity
    }
}

/// Point storage that keeps each coordinate in its own array.
///
/// Coordinate `i` of point `k` lives at offset `k` of array `i`. All `N` arrays always have
/// the same length and at least the same capacity.
#[derive(Debug)]
pub struct ParallelPointStorage<T: RealScalar, const N: usize> {
    columns: [Vec<T>; N],
    count: usize,
    capacity: usize,
}

impl<T: RealScalar, const N: usize> ParallelPointStorage<T, N> {
    /// Create an empty storage. Nothing is allocated until the first point is added.
    pub fn new() -> Self {
        Self {
            columns: std::array::from_fn(|_| Vec::new()),
            count: 0,
            capacity: 0,
        }
    }

    /// Create an empty storage with room for at least `capacity` points.
    pub fn with_capacity(capacity: usize) -> Result<Self, StorageError> {
        let mut storage = Self::new();
        storage.ensure_capacity(capacity)?;
        Ok(storage)
    }

    /// Make room for at least `additional` more points.
    pub fn reserve(&mut self, additional: usize) -> Result<(), StorageError> {
        self.ensure_capacity(self.count.saturating_add(additional))
    }

    fn ensure_capacity(&mut self, target: usize) -> Result<(), StorageError> {
        if self.capacity != 0 && target <= self.capacity {
            return Ok(());
        }
        let new_capacity = grown_capacity(self.capacity, target);
        // Columns grown before a failure keep their larger allocation; the logical
        // capacity and the stored points are untouched.
        for column in self.columns.iter_mut() {
            column
                .try_reserve_exact(new_capacity - column.len())
                .map_err(|source| {
                    warn!(
                        requested = new_capacity,
                        "failed to grow parallel point storage"
                    );
                    StorageError::AllocationFailure {
                        requested: new_capacity,
                        source,
                    }
                })?;
        }
        debug!(
            dim = N,
            from = self.capacity,
            to = new_capacity,
            "grew parallel point storage"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Append a point, growing the storage if it is full.
    ///
    /// On failure the storage is left unchanged.
    pub fn add<P: PointTrait<N, T = T>>(&mut self, point: &P) -> Result<(), StorageError> {
        if self.count >= self.capacity {
            self.ensure_capacity(self.count + 1)?;
        }
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.push(point.coord(i));
        }
        self.count += 1;
        Ok(())
    }

    /// Append every point of an iterator.
    pub fn try_extend<P: PointTrait<N, T = T>>(
        &mut self,
        points: impl IntoIterator<Item = P>,
    ) -> Result<(), StorageError> {
        let points = points.into_iter();
        self.reserve(points.size_hint().0)?;
        for p in points {
            self.add(&p)?;
        }
        Ok(())
    }

    /// Number of points
    pub fn size(&self) -> usize {
        self.count
    }

    /// Is the storage empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of points that fit without growing
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The array holding coordinate `dim` of every point.
    pub fn coordinates(&self, dim: usize) -> &[T] {
        &self.columns[dim]
    }

    /// A view of the point at `index`. The index is not checked.
    pub fn view(&self, index: usize) -> PointView<'_, T, N> {
        PointView::new(self, index)
    }

    /// A view of the first point
    pub fn begin(&self) -> PointView<'_, T, N> {
        self.view(0)
    }

    /// A view past the last point. This never compares equal to a view of a stored point.
    pub fn end(&self) -> PointView<'_, T, N> {
        self.view(usize::MAX)
    }

    /// Iterate over views of every point
    pub fn iter(&self) -> PointIter<'_, T, N> {
        PointIter::new(self.begin())
    }

    /// Copy the point at `index` out of the storage.
    pub fn point(&self, index: usize) -> Result<FixedPoint<T, N>, StorageError> {
        self.view(index).to_point()
    }

    /// Coordinate `coord` of the point at `index`.
    pub(crate) fn value(&self, coord: usize, index: usize) -> Result<&T, StorageError> {
        if coord >= N {
            Err(StorageError::InvalidCoordinate { coord, dim: N })
        } else if index >= self.count {
            Err(StorageError::OutOfRange {
                index,
                size: self.count,
            })
        } else {
            Ok(&self.columns[coord][index])
        }
    }
}

impl<T: RealScalar, const N: usize> Clone for ParallelPointStorage<T, N> {
    /// The clone has the same logical capacity as the original, with every column
    /// allocated to match.
    fn clone(&self) -> Self {
        Self {
            columns: std::array::from_fn(|i| {
                let mut column = Vec::with_capacity(self.capacity);
                column.extend_from_slice(&self.columns[i]);
                column
            }),
            count: self.count,
            capacity: self.capacity,
        }
    }
}

impl<T: RealScalar, const N: usize> Default for ParallelPointStorage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: RealScalar, const N: usize> IntoIterator for &'a ParallelPointStorage<T, N> {
    type Item = PointView<'a, T, N>;
    type IntoIter = PointIter<'a, T, N>;

    fn into_iter(self) -> PointIter<'a, T, N> {
        self.iter()
    }
}
