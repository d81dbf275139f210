//! Linear combinators and the adjoint expression type.
//!
//! A linear combinator keeps the matching non-linear combinator as its forward evaluation
//! and adds the adjoint rule on top:
//!
//! - (A + B)ᵀ = Aᵀ + Bᵀ
//! - (A ∘ B)ᵀ = Bᵀ ∘ Aᵀ
//! - (a·A)ᵀ = a·Aᵀ for real a
//! - (Aᵀ)ᵀ = A
//!
//! [`SelfAdjoint`] turns a [`SelfAdjointOperator`] into a linear operator whose adjoint
//! is its forward map.

use std::sync::Arc;

use crate::core::traits::{Element, Space};
use crate::error::OpError;
use crate::operator::combinators::{Composition, LeftScalarMultiplication, Sum};
use crate::operator::{LinearOperator, Op, Operator, SelfAdjointOperator};

/// Expression type for the sum of linear operators.
#[derive(Debug)]
pub struct LinearSum<S: Space> {
    forward: Sum<S>,
    op1: Arc<dyn LinearOperator<S>>,
    op2: Arc<dyn LinearOperator<S>>,
}

impl<S: Space> LinearSum<S> {
    pub fn new(op1: Op<S>, op2: Op<S>) -> Result<Self, OpError> {
        let lin1 = op1.require_linear("LinearSum")?;
        let lin2 = op2.require_linear("LinearSum")?;
        Ok(Self {
            forward: Sum::new(op1, op2)?,
            op1: lin1,
            op2: lin2,
        })
    }
}

impl<S: Space> Operator<S> for LinearSum<S> {
    fn domain(&self) -> &S {
        self.forward.domain()
    }

    fn range(&self) -> &S {
        self.forward.range()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        self.forward.apply_impl(rhs, out);
    }
}

impl<S: Space> LinearOperator<S> for LinearSum<S> {
    fn apply_adjoint_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        let mut tmp = self.domain().temporary();
        self.op1.apply_adjoint_impl(rhs, out);
        self.op2.apply_adjoint_impl(rhs, &mut tmp);
        out.add_in_place(&tmp);
    }
}

/// Expression type for the composition of linear operators.
#[derive(Debug)]
pub struct LinearComposition<S: Space> {
    forward: Composition<S>,
    left: Arc<dyn LinearOperator<S>>,
    right: Arc<dyn LinearOperator<S>>,
}

impl<S: Space> LinearComposition<S> {
    pub fn new(left: Op<S>, right: Op<S>) -> Result<Self, OpError> {
        let lin_left = left.require_linear("LinearComposition")?;
        let lin_right = right.require_linear("LinearComposition")?;
        Ok(Self {
            forward: Composition::new(left, right)?,
            left: lin_left,
            right: lin_right,
        })
    }
}

impl<S: Space> Operator<S> for LinearComposition<S> {
    fn domain(&self) -> &S {
        self.forward.domain()
    }

    fn range(&self) -> &S {
        self.forward.range()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        self.forward.apply_impl(rhs, out);
    }
}

impl<S: Space> LinearOperator<S> for LinearComposition<S> {
    fn apply_adjoint_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        let mut tmp = self.left.domain().temporary();
        self.left.apply_adjoint_impl(rhs, &mut tmp);
        self.right.apply_adjoint_impl(&tmp, out);
    }
}

/// Expression type for a real multiple of a linear operator.
///
/// Left and right multiplication coincide for linear maps, so this single type serves both.
#[derive(Debug)]
pub struct LinearScalarMultiplication<S: Space> {
    forward: LeftScalarMultiplication<S>,
    op: Arc<dyn LinearOperator<S>>,
}

impl<S: Space> LinearScalarMultiplication<S> {
    pub fn new(op: Op<S>, scalar: S::Scalar) -> Result<Self, OpError> {
        let lin = op.require_linear("LinearScalarMultiplication")?;
        Ok(Self {
            forward: LeftScalarMultiplication::new(op, scalar)?,
            op: lin,
        })
    }

    pub fn scalar(&self) -> S::Scalar {
        self.forward.scalar()
    }
}

impl<S: Space> Operator<S> for LinearScalarMultiplication<S> {
    fn domain(&self) -> &S {
        self.forward.domain()
    }

    fn range(&self) -> &S {
        self.forward.range()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        self.forward.apply_impl(rhs, out);
    }
}

impl<S: Space> LinearOperator<S> for LinearScalarMultiplication<S> {
    fn apply_adjoint_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        self.op.apply_adjoint_impl(rhs, out);
        out.scale_in_place(self.scalar());
    }
}

/// Expression type for the adjoint of a linear operator.
#[derive(Debug)]
pub struct Adjoint<S: Space> {
    op: Arc<dyn LinearOperator<S>>,
}

impl<S: Space> Adjoint<S> {
    pub fn new(op: Op<S>) -> Result<Self, OpError> {
        let op = op.require_linear("Adjoint")?;
        tracing::debug!(kind = "adjoint", "built operator combinator");
        Ok(Self { op })
    }
}

impl<S: Space> Operator<S> for Adjoint<S> {
    fn domain(&self) -> &S {
        self.op.range()
    }

    fn range(&self) -> &S {
        self.op.domain()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        self.op.apply_adjoint_impl(rhs, out);
    }
}

impl<S: Space> LinearOperator<S> for Adjoint<S> {
    fn apply_adjoint_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        self.op.apply_impl(rhs, out);
    }
}

/// A self-adjoint operator viewed as a linear operator: Aᵀ = A.
#[derive(Debug, Clone)]
pub struct SelfAdjoint<A>(A);

impl<A> SelfAdjoint<A> {
    pub fn new(op: A) -> Self {
        SelfAdjoint(op)
    }

    pub fn inner(&self) -> &A {
        &self.0
    }
}

impl<S: Space, A: SelfAdjointOperator<S>> Operator<S> for SelfAdjoint<A> {
    fn domain(&self) -> &S {
        self.0.domain()
    }

    fn range(&self) -> &S {
        self.0.range()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        self.0.apply_impl(rhs, out);
    }
}

impl<S: Space, A: SelfAdjointOperator<S>> LinearOperator<S> for SelfAdjoint<A> {
    fn apply_adjoint_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        self.0.apply_impl(rhs, out);
    }
}
