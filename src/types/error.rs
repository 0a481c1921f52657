//! Errors
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors reported by point storage
#[derive(Debug, Error)]
pub enum StorageError {
    /// Growing the coordinate arrays could not obtain the requested memory
    #[error("could not grow point storage to a capacity of {requested} points")]
    AllocationFailure {
        /// The capacity that was requested
        requested: usize,
        /// The allocator error
        #[source]
        source: TryReserveError,
    },
    /// A view was dereferenced at an index that does not hold a point
    #[error("point index {index} is out of range for a storage of {size} points")]
    OutOfRange {
        /// The index of the view
        index: usize,
        /// The number of points in the storage
        size: usize,
    },
    /// A coordinate index was not smaller than the dimension
    #[error("coordinate {coord} is out of range for points of dimension {dim}")]
    InvalidCoordinate {
        /// The requested coordinate
        coord: usize,
        /// The dimension of the points
        dim: usize,
    },
}
