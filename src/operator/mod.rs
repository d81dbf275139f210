//! Operators between vector spaces and their algebra.
//!
//! An [`Operator`] declares its domain and range and implements an unchecked evaluation
//! primitive, `apply_impl`. Callers go through the checked entry points (`apply`, `call`),
//! which verify membership of both arguments and reject aliased buffers before delegating.
//! [`LinearOperator`] adds the adjoint primitive and its checked counterpart.
//!
//! Operator expressions are built from shared [`Op`] handles: sums, compositions, pointwise
//! products, scalar multiples and adjoints wrap their operands without evaluating anything
//! until the expression is applied.
//!
//! # References
//! - Kreyszig, E. (1978). Introductory Functional Analysis with Applications, Ch. 2 and 3.

use crate::core::traits::{Element, Space};
use crate::error::OpError;

pub mod combinators;
pub mod expr;
pub mod linear;

pub use combinators::{
    Composition, LeftScalarMultiplication, PointwiseProduct, RightScalarMultiplication, Sum,
};
pub use expr::{Op, Operand};
pub use linear::{
    Adjoint, LinearComposition, LinearScalarMultiplication, LinearSum, SelfAdjoint,
};

/// A mapping from `domain` to `range`.
pub trait Operator<S: Space>: Send + Sync + std::fmt::Debug {
    /// Space of valid inputs.
    fn domain(&self) -> &S;

    /// Space of valid outputs.
    fn range(&self) -> &S;

    /// Evaluate the operator, writing the result into `out`.
    ///
    /// Arguments are not checked: `rhs` must lie in the domain, `out` in the range and the two
    /// must not share storage. Public callers should use [`Operator::apply`].
    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element);

    /// Derivative of the operator at `point`.
    ///
    /// No generic derivative exists, so the default fails. Linear operators wrapped in
    /// [`Op::Linear`] are their own derivative and never reach this hook.
    fn derivative(&self, _point: &S::Element) -> Result<Op<S>, OpError> {
        Err(OpError::Unsupported(format!("derivative not implemented for {self:?}")))
    }

    /// Checked evaluation: out ← A(rhs).
    fn apply(&self, rhs: &S::Element, out: &mut S::Element) -> Result<(), OpError> {
        check_args(self.domain(), self.range(), rhs, out)?;
        self.apply_impl(rhs, out);
        Ok(())
    }

    /// Evaluate into a freshly allocated element of the range.
    fn call(&self, rhs: &S::Element) -> Result<S::Element, OpError> {
        let mut out = self.range().empty();
        self.apply(rhs, &mut out)?;
        Ok(out)
    }
}

/// An operator satisfying A(ax + by) = a·A(x) + b·A(y), with a known adjoint.
///
/// Linearity is a contract of the implementor and is not verified numerically.
pub trait LinearOperator<S: Space>: Operator<S> {
    /// Evaluate the adjoint, writing the result into `out`.
    ///
    /// `rhs` must lie in the range and `out` in the domain; nothing is checked.
    fn apply_adjoint_impl(&self, rhs: &S::Element, out: &mut S::Element);

    /// Checked adjoint evaluation: out ← Aᵀ(rhs).
    fn apply_adjoint(&self, rhs: &S::Element, out: &mut S::Element) -> Result<(), OpError> {
        check_args(self.range(), self.domain(), rhs, out)?;
        self.apply_adjoint_impl(rhs, out);
        Ok(())
    }

    /// Evaluate the adjoint into a freshly allocated element of the domain.
    fn call_adjoint(&self, rhs: &S::Element) -> Result<S::Element, OpError> {
        let mut out = self.domain().empty();
        self.apply_adjoint(rhs, &mut out)?;
        Ok(out)
    }
}

/// Linear operators equal to their own adjoint.
///
/// Implementors provide only the forward primitive. Wrapping the operator in
/// [`SelfAdjoint`] (or building it with [`Op::self_adjoint`]) supplies the adjoint
/// primitive as the same map.
pub trait SelfAdjointOperator<S: Space>: Operator<S> {}

/// Precondition check shared by every checked entry point.
pub(crate) fn check_args<S: Space>(
    domain: &S,
    range: &S,
    rhs: &S::Element,
    out: &S::Element,
) -> Result<(), OpError> {
    if !domain.contains(rhs) {
        tracing::debug!(?domain, "rejected input outside the domain");
        return Err(OpError::Domain(format!("{domain:?}")));
    }
    if !range.contains(out) {
        tracing::debug!(?range, "rejected output outside the range");
        return Err(OpError::Range(format!("{range:?}")));
    }
    if rhs.shares_storage(out) {
        tracing::debug!("rejected aliased input and output");
        return Err(OpError::Aliasing);
    }
    Ok(())
}
