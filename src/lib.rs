//! Distance spectra of n-dimensional point sets
//!
//! Points can be held in a plain slice of [`FixedPoint`]s or in a
//! structure-of-arrays [`ParallelPointStorage`]. Distances are computed by either a
//! [`RuntimeLoop`] or an [`Unrolled`] metric, and classified by a [`DistanceHistogram`].
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod geometry;
pub mod histogram;
pub mod metric;
pub mod shapes;
pub mod spectrum;
pub mod traits;
pub mod types;

pub use geometry::{FixedPoint, ParallelPointStorage, PointView};
pub use histogram::DistanceHistogram;
pub use metric::{RuntimeLoop, Unrolled};
