//! Distance as a sum of terms expanded at compile time
//!
//! The number of coordinates is lifted into a type-level count ([`Zero`], [`Succ`]), and
//! [`Terms::accumulate`] recurses on that type. Each level contributes exactly one term,
//! so for a given dimension the sum is expanded into straight-line code with no loop
//! counter and no branch on the dimension.
use crate::{
    traits::{DistanceMetric, Point},
    types::RealScalar,
};
use std::marker::PhantomData;

/// No terms
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

/// One more term than `P`
#[derive(Debug, Clone, Copy, Default)]
pub struct Succ<P>(PhantomData<P>);

/// A type-level number of terms
pub trait Terms {
    /// Number of terms
    const COUNT: usize;

    /// Sum `term(offset) + term(offset + 1) + ...` over [`Self::COUNT`] terms.
    fn accumulate<R: RealScalar, F: Fn(usize) -> R>(offset: usize, term: &F) -> R;
}

impl Terms for Zero {
    const COUNT: usize = 0;

    #[inline(always)]
    fn accumulate<R: RealScalar, F: Fn(usize) -> R>(_offset: usize, _term: &F) -> R {
        R::zero()
    }
}

impl Terms for Succ<Zero> {
    const COUNT: usize = 1;

    #[inline(always)]
    fn accumulate<R: RealScalar, F: Fn(usize) -> R>(offset: usize, term: &F) -> R {
        term(offset)
    }
}

impl<P> Terms for Succ<Succ<P>>
where
    Succ<P>: Terms,
{
    const COUNT: usize = <Succ<P> as Terms>::COUNT + 1;

    #[inline(always)]
    fn accumulate<R: RealScalar, F: Fn(usize) -> R>(offset: usize, term: &F) -> R {
        term(offset) + <Succ<P> as Terms>::accumulate(offset + 1, term)
    }
}

/// A dimension as a type
#[derive(Debug, Clone, Copy, Default)]
pub struct Dim<const N: usize>;

/// Dimensions that the unrolled distance supports
pub trait Unrollable {
    /// The type-level count of terms for this dimension
    type Terms: Terms;
}

impl Unrollable for Dim<0> {
    type Terms = Zero;
}

macro_rules! unrollable_dims {
    ($prev:ty;) => {};
    ($prev:ty; $n:literal $(, $rest:literal)*) => {
        impl Unrollable for Dim<$n> {
            type Terms = Succ<$prev>;
        }
        unrollable_dims!(Succ<$prev>; $($rest),*);
    };
}

unrollable_dims!(Zero;
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64
);

/// Euclidean distance with one addition term per coordinate, expanded at compile time.
///
/// Available for dimensions 0 to 64.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrolled;

impl<const N: usize> DistanceMetric<N> for Unrolled
where
    Dim<N>: Unrollable,
{
    #[inline]
    fn distance<R, P0, P1>(p0: &P0, p1: &P1) -> R
    where
        R: RealScalar + From<P0::T> + From<P1::T>,
        P0: Point<N>,
        P1: Point<N>,
    {
        let squared_difference = |i: usize| {
            let a: R = p1.coord(i).into();
            let b: R = p0.coord(i).into();
            let diff = a - b;
            diff * diff
        };
        let sum = <<Dim<N> as Unrollable>::Terms as Terms>::accumulate(0, &squared_difference);
        sum.sqrt()
    }
}
