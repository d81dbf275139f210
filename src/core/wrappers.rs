//! Reference coordinate space `Rⁿ` over contiguous `Vec<T>` storage.
//!
//! This module provides [`Rn`] and [`RnVector`], implementing the core space and element
//! traits so that operators, solvers and tests have a concrete space to work with.
//! Inner products and norms optionally run on Rayon's thread pool.
//!
//! # Features
//! - Membership by dimension: an `RnVector` belongs to `Rn` when the lengths agree.
//! - In-place addition, scaling, `axpy` and pointwise multiplication.
//! - Storage-overlap detection for the aliasing check of the checked entry points.
//!
//! # References
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{Element, PointwiseMul, Space};
use num_traits::Float;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Real coordinate space of fixed dimension.
pub struct Rn<T> {
    dim: usize,
    _scalar: PhantomData<fn() -> T>,
}

impl<T> Rn<T> {
    pub fn new(dim: usize) -> Self {
        Self { dim, _scalar: PhantomData }
    }

    /// Number of coordinates.
    pub fn dim(&self) -> usize {
        self.dim
    }
}

impl<T: Float> Rn<T> {
    /// Element filled with `value`.
    pub fn full(&self, value: T) -> RnVector<T> {
        RnVector::from(vec![value; self.dim])
    }

    /// Element whose i-th coordinate is `f(i)`.
    pub fn element_from_fn(&self, f: impl FnMut(usize) -> T) -> RnVector<T> {
        RnVector::from((0..self.dim).map(f).collect::<Vec<_>>())
    }
}

impl<T> Clone for Rn<T> {
    fn clone(&self) -> Self {
        Self::new(self.dim)
    }
}

impl<T> PartialEq for Rn<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim
    }
}

impl<T> Eq for Rn<T> {}

impl<T> fmt::Debug for Rn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rn({})", self.dim)
    }
}

impl<T: Float + fmt::Debug + Send + Sync + 'static> Space for Rn<T> {
    type Scalar = T;
    type Element = RnVector<T>;

    fn contains(&self, x: &RnVector<T>) -> bool {
        x.len() == self.dim
    }

    /// Hands out zeros; callers still treat the contents as unspecified.
    fn empty(&self) -> RnVector<T> {
        self.zero()
    }

    fn zero(&self) -> RnVector<T> {
        RnVector::from(vec![T::zero(); self.dim])
    }
}

/// Element of [`Rn`], owning its coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct RnVector<T> {
    data: Vec<T>,
}

impl<T> RnVector<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for RnVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> AsRef<[T]> for RnVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for RnVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<usize> for RnVector<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for RnVector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

/// Implements vector arithmetic for `RnVector`, with optional Rayon parallelism.
///
/// If the `rayon` feature is enabled, the inner product uses parallel iterators.
impl<T: Float + fmt::Debug + Send + Sync> Element for RnVector<T> {
    type Scalar = T;

    fn add_in_place(&mut self, other: &Self) {
        debug_assert_eq!(self.len(), other.len(), "Vectors must have the same length");
        for (xi, yi) in self.data.iter_mut().zip(&other.data) {
            *xi = *xi + *yi;
        }
    }

    fn scale_in_place(&mut self, a: T) {
        for xi in self.data.iter_mut() {
            *xi = *xi * a;
        }
    }

    fn axpy(&mut self, a: T, x: &Self) {
        debug_assert_eq!(self.len(), x.len(), "Vectors must have the same length");
        for (yi, xi) in self.data.iter_mut().zip(&x.data) {
            *yi = *yi + a * *xi;
        }
    }

    /// Computes the dot product of two vectors: `x^T y`.
    fn inner(&self, other: &Self) -> T {
        debug_assert_eq!(self.len(), other.len(), "Vectors must have the same length");
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            self.data
                .par_iter()
                .zip(other.data.par_iter())
                .map(|(xi, yi)| *xi * *yi)
                .reduce(|| T::zero(), |acc, v| acc + v)
        }
        #[cfg(not(feature = "rayon"))]
        {
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(xi, yi)| *xi * *yi)
                .fold(T::zero(), |acc, v| acc + v)
        }
    }

    fn shares_storage(&self, other: &Self) -> bool {
        // zero-length vectors may share a dangling pointer without sharing data
        if self.data.is_empty() || other.data.is_empty() {
            return false;
        }
        let a = self.data.as_ptr_range();
        let b = other.data.as_ptr_range();
        a.start < b.end && b.start < a.end
    }
}

impl<T: Float + fmt::Debug + Send + Sync> PointwiseMul for RnVector<T> {
    fn mul_in_place(&mut self, other: &Self) {
        debug_assert_eq!(self.len(), other.len(), "Vectors must have the same length");
        for (xi, yi) in self.data.iter_mut().zip(&other.data) {
            *xi = *xi * *yi;
        }
    }
}
