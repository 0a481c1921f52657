//! Types

mod error;
pub use error::StorageError;

use num::Float;
use std::{
    fmt::Debug,
    iter::Sum,
    ops::{AddAssign, SubAssign},
};

/// A floating point coordinate type.
///
/// Integer coordinate types do not implement this trait, so points, storages and
/// histograms over them cannot be instantiated.
pub trait RealScalar: Float + Debug + Default + AddAssign + SubAssign + Sum + 'static {}

impl RealScalar for f32 {}
impl RealScalar for f64 {}

