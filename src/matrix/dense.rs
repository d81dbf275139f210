//! Dense matrix operators on top of Faer.
//!
//! [`MatrixOperator`] wraps a `faer::Mat<T>` of shape `m × n` as a linear operator
//! `Rⁿ → Rᵐ`. The forward primitive is the matrix-vector product and the adjoint primitive
//! the matrix-transpose-vector product.

use crate::core::wrappers::{Rn, RnVector};
use crate::error::OpError;
use crate::operator::{LinearOperator, Operator};
use faer::Mat;
use num_traits::Float;
use std::fmt;

/// Linear operator defined by a dense matrix.
pub struct MatrixOperator<T> {
    matrix: Mat<T>,
    domain: Rn<T>,
    range: Rn<T>,
}

impl<T: Float> MatrixOperator<T> {
    pub fn new(matrix: Mat<T>) -> Self {
        let domain = Rn::new(matrix.ncols());
        let range = Rn::new(matrix.nrows());
        Self { matrix, domain, range }
    }

    /// Construct from raw column-major storage.
    pub fn from_raw(nrows: usize, ncols: usize, data: &[T]) -> Result<Self, OpError> {
        if data.len() != nrows * ncols {
            return Err(OpError::Compatibility(format!(
                "{} values cannot fill a {nrows}x{ncols} matrix",
                data.len()
            )));
        }
        Ok(Self::new(Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])))
    }

    pub fn matrix(&self) -> &Mat<T> {
        &self.matrix
    }
}

impl<T> fmt::Debug for MatrixOperator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatrixOperator({}x{})", self.range.dim(), self.domain.dim())
    }
}

/// Computes `y = A * x`.
impl<T: Float + fmt::Debug + Send + Sync + 'static> Operator<Rn<T>> for MatrixOperator<T> {
    fn domain(&self) -> &Rn<T> {
        &self.domain
    }

    fn range(&self) -> &Rn<T> {
        &self.range
    }

    fn apply_impl(&self, rhs: &RnVector<T>, out: &mut RnVector<T>) {
        let (x, y) = (rhs.as_slice(), out.as_mut_slice());
        for i in 0..self.matrix.nrows() {
            y[i] = T::zero();
            for j in 0..self.matrix.ncols() {
                y[i] = y[i] + self.matrix[(i, j)] * x[j];
            }
        }
    }
}

/// Computes `y = A^T * x`.
impl<T: Float + fmt::Debug + Send + Sync + 'static> LinearOperator<Rn<T>> for MatrixOperator<T> {
    fn apply_adjoint_impl(&self, rhs: &RnVector<T>, out: &mut RnVector<T>) {
        let (x, y) = (rhs.as_slice(), out.as_mut_slice());
        for j in 0..self.matrix.ncols() {
            y[j] = T::zero();
            for i in 0..self.matrix.nrows() {
                y[j] = y[j] + self.matrix[(i, j)] * x[i];
            }
        }
    }
}
