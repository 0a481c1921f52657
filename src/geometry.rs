//! Points and point storage
mod point;
mod storage;
mod view;
pub use point::FixedPoint;
pub use storage::{grown_capacity, ParallelPointStorage, MIN_CAPACITY};
pub use view::{PointIter, PointView};
