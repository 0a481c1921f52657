//! Euclidean distance strategies
mod runtime_loop;
mod unrolled;

pub use runtime_loop::RuntimeLoop;
pub use unrolled::{Dim, Succ, Terms, Unrollable, Unrolled, Zero};
