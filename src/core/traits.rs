//! Core vector-space traits for opalg.
//!
//! Operators never own data; they read from and write into elements handed
//! out by a [`Space`]. Everything an operator needs from a space or from its
//! elements is listed here.

use num_traits::Float;
use std::fmt;

/// The field of real scalars.
///
/// A scalar is a member when it is finite; `NaN` and infinities are rejected
/// when an operator is scaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reals;

impl Reals {
    /// Membership test for a candidate scalar.
    pub fn contains<T: Float>(&self, scalar: T) -> bool {
        scalar.is_finite()
    }
}

impl fmt::Display for Reals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("R")
    }
}

/// Vector arithmetic required from elements of a [`Space`].
pub trait Element: Clone + fmt::Debug {
    /// Associated scalar type.
    type Scalar: Float + fmt::Debug + Send + Sync;

    /// self ← self + other
    fn add_in_place(&mut self, other: &Self);

    /// self ← a · self
    fn scale_in_place(&mut self, a: Self::Scalar);

    /// self ← self + a · x
    fn axpy(&mut self, a: Self::Scalar, x: &Self) {
        let mut ax = x.clone();
        ax.scale_in_place(a);
        self.add_in_place(&ax);
    }

    /// Compute ⟨self, other⟩.
    fn inner(&self, other: &Self) -> Self::Scalar;

    /// Compute ‖self‖².
    fn norm_sq(&self) -> Self::Scalar {
        self.inner(self)
    }

    /// True when writing into `self` could change what `other` reads.
    fn shares_storage(&self, other: &Self) -> bool;
}

/// Elements of a space that is an algebra under pointwise multiplication.
pub trait PointwiseMul: Element {
    /// self ← self ⊙ other
    fn mul_in_place(&mut self, other: &Self);
}

/// A vector space: membership, scalar field and buffer allocation.
///
/// Two spaces compare equal when their elements are interchangeable; this is
/// the only test used when operators are combined.
pub trait Space: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Scalar type of the underlying field.
    type Scalar: Float + fmt::Debug + Send + Sync;
    /// Element (buffer) type.
    type Element: Element<Scalar = Self::Scalar>;

    /// Field the space is defined over.
    fn field(&self) -> Reals {
        Reals
    }

    /// Is `x` a member of this space?
    fn contains(&self, x: &Self::Element) -> bool;

    /// Allocate an element with unspecified contents.
    fn empty(&self) -> Self::Element;

    /// Allocate the zero element.
    fn zero(&self) -> Self::Element;

    /// Allocate a scratch buffer for intermediate results.
    ///
    /// Combinators allocate every temporary through this hook, so a space can
    /// pool or arena-allocate scratch buffers by overriding it.
    fn temporary(&self) -> Self::Element {
        self.empty()
    }
}
