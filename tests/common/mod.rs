//! Shared fixtures for the integration tests.
//!
//! `SharedSpace` hands out reference-counted buffers whose handles can alias each other,
//! which plain `Vec`-backed elements never do. `Square` is the non-linear operator x ↦ x⊙x
//! used as a counterexample wherever linearity matters.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use faer::Mat;
use opalg::{Element, Operator, PointwiseMul, RnVector, Space};
use rand::Rng;

/// Coordinate space whose elements are shared handles to one buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct SharedSpace {
    pub dim: usize,
}

/// Element of [`SharedSpace`]. `clone` copies the data; `share` copies the handle.
#[derive(Debug)]
pub struct SharedVector(Rc<RefCell<Vec<f64>>>);

impl SharedVector {
    pub fn new(values: Vec<f64>) -> Self {
        SharedVector(Rc::new(RefCell::new(values)))
    }

    /// Second handle to the same storage.
    pub fn share(&self) -> Self {
        SharedVector(Rc::clone(&self.0))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.borrow().clone()
    }
}

impl Clone for SharedVector {
    fn clone(&self) -> Self {
        SharedVector::new(self.to_vec())
    }

    // writes through the existing handle so shared views observe the result
    fn clone_from(&mut self, source: &Self) {
        let values = source.to_vec();
        *self.0.borrow_mut() = values;
    }
}

impl Element for SharedVector {
    type Scalar = f64;

    fn add_in_place(&mut self, other: &Self) {
        let other = other.0.borrow();
        for (x, y) in self.0.borrow_mut().iter_mut().zip(other.iter()) {
            *x += *y;
        }
    }

    fn scale_in_place(&mut self, a: f64) {
        self.0.borrow_mut().iter_mut().for_each(|x| *x *= a);
    }

    fn inner(&self, other: &Self) -> f64 {
        let (x, y) = (self.0.borrow(), other.0.borrow());
        x.iter().zip(y.iter()).map(|(a, b)| a * b).sum()
    }

    fn shares_storage(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PointwiseMul for SharedVector {
    fn mul_in_place(&mut self, other: &Self) {
        let other = other.0.borrow();
        for (x, y) in self.0.borrow_mut().iter_mut().zip(other.iter()) {
            *x *= *y;
        }
    }
}

impl Space for SharedSpace {
    type Scalar = f64;
    type Element = SharedVector;

    fn contains(&self, x: &SharedVector) -> bool {
        x.0.borrow().len() == self.dim
    }

    fn empty(&self) -> SharedVector {
        self.zero()
    }

    fn zero(&self) -> SharedVector {
        SharedVector::new(vec![0.0; self.dim])
    }
}

/// `Rⁿ` that counts the scratch buffers handed out by `temporary`.
#[derive(Clone, Debug)]
pub struct CountingSpace {
    pub dim: usize,
    temporaries: Arc<AtomicUsize>,
}

impl CountingSpace {
    pub fn new(dim: usize) -> Self {
        CountingSpace { dim, temporaries: Arc::new(AtomicUsize::new(0)) }
    }

    /// Number of temporaries allocated since the last call.
    pub fn take_temporaries(&self) -> usize {
        self.temporaries.swap(0, Ordering::SeqCst)
    }
}

impl PartialEq for CountingSpace {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim
    }
}

impl Space for CountingSpace {
    type Scalar = f64;
    type Element = RnVector<f64>;

    fn contains(&self, x: &RnVector<f64>) -> bool {
        x.len() == self.dim
    }

    fn empty(&self) -> RnVector<f64> {
        self.zero()
    }

    fn zero(&self) -> RnVector<f64> {
        RnVector::from(vec![0.0; self.dim])
    }

    fn temporary(&self) -> RnVector<f64> {
        self.temporaries.fetch_add(1, Ordering::SeqCst);
        self.zero()
    }
}

/// x ↦ x ⊙ x on any space that is an algebra.
#[derive(Debug)]
pub struct Square<S> {
    pub space: S,
}

impl<S: Space> Operator<S> for Square<S>
where
    S::Element: PointwiseMul,
{
    fn domain(&self) -> &S {
        &self.space
    }

    fn range(&self) -> &S {
        &self.space
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        out.clone_from(rhs);
        out.mul_in_place(rhs);
    }
}

/// Random `m × n` matrix with entries in [-1, 1).
pub fn random_matrix(m: usize, n: usize) -> Mat<f64> {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..m * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Mat::from_fn(m, n, |i, j| data[j * m + i])
}

/// Random vector with entries in [-1, 1).
pub fn random_vec(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}
