//! Traits

mod metric;
mod point;

pub use metric::DistanceMetric;
pub use point::Point;
