//! Points on the unit hypercube

use crate::{
    geometry::{FixedPoint, ParallelPointStorage},
    types::{RealScalar, StorageError},
};

/// The 2^N vertices of the unit hypercube
///
/// Coordinate `i` of vertex `k` is bit `i` of `k`, so in two dimensions the vertices are
/// (0,0), (1,0), (0,1) and (1,1) in that order.
pub fn hypercube_vertices<T: RealScalar, const N: usize>() -> Vec<FixedPoint<T, N>> {
    if N >= usize::BITS as usize {
        panic!("Unsupported dimension for hypercube vertices: {N}");
    }
    (0..1usize << N)
        .map(|k| {
            FixedPoint::new(std::array::from_fn(|i| {
                if (k >> i) & 1 == 1 {
                    T::one()
                } else {
                    T::zero()
                }
            }))
        })
        .collect()
}

/// A regular lattice of `(n + 1)^N` points covering the unit hypercube
///
/// The points are spaced `1 / n` apart along each axis, with the first coordinate varying
/// fastest.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn unit_lattice<T: RealScalar, const N: usize>(
    n: usize,
) -> Result<ParallelPointStorage<T, N>, StorageError> {
    if n == 0 {
        panic!("A unit lattice needs at least one division");
    }
    let side = n + 1;
    let count = (0..N).fold(1usize, |acc, _| acc.saturating_mul(side));
    let mut storage = ParallelPointStorage::with_capacity(count)?;
    let step = T::one() / T::from(n).unwrap();
    let mut index = [0usize; N];
    for _ in 0..count {
        storage.add(&index.map(|i| T::from(i).unwrap() * step))?;
        for digit in index.iter_mut() {
            *digit += 1;
            if *digit < side {
                break;
            }
            *digit = 0;
        }
    }
    Ok(storage)
}
