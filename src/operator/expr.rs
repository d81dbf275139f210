//! Shared operator handles and algebraic builders.
//!
//! [`Op`] tags an operator as linear or not; [`Operand`] tags a value as operator-like or
//! scalar-like. Builders match on those tags to pick the strongest combinator available:
//! an expression whose operands are all linear is itself linear and keeps its adjoint.

use std::sync::Arc;

use crate::core::traits::{PointwiseMul, Space};
use crate::error::OpError;
use crate::operator::combinators::{
    Composition, LeftScalarMultiplication, PointwiseProduct, RightScalarMultiplication, Sum,
};
use crate::operator::linear::{
    Adjoint, LinearComposition, LinearScalarMultiplication, LinearSum, SelfAdjoint,
};
use crate::operator::{LinearOperator, Operator, SelfAdjointOperator};

/// Shared handle to an operator, tagged by linearity.
#[derive(Clone, Debug)]
pub enum Op<S: Space> {
    /// An operator with no adjoint.
    Nonlinear(Arc<dyn Operator<S>>),
    /// A linear operator; its adjoint is available.
    Linear(Arc<dyn LinearOperator<S>>),
}

/// A right-hand operand of an algebraic builder.
#[derive(Clone, Debug)]
pub enum Operand<S: Space> {
    Operator(Op<S>),
    Scalar(S::Scalar),
}

impl<S: Space> Operand<S> {
    pub fn scalar(a: S::Scalar) -> Self {
        Operand::Scalar(a)
    }
}

impl<S: Space> From<Op<S>> for Operand<S> {
    fn from(op: Op<S>) -> Self {
        Operand::Operator(op)
    }
}

impl<S: Space> From<&Op<S>> for Operand<S> {
    fn from(op: &Op<S>) -> Self {
        Operand::Operator(op.clone())
    }
}

impl<S: Space> Op<S> {
    /// Wrap an operator without a known adjoint.
    pub fn new<A: Operator<S> + 'static>(op: A) -> Self {
        Op::Nonlinear(Arc::new(op))
    }

    /// Wrap a linear operator.
    pub fn linear<A: LinearOperator<S> + 'static>(op: A) -> Self {
        Op::Linear(Arc::new(op))
    }

    /// Wrap a self-adjoint operator; its adjoint is the forward map.
    pub fn self_adjoint<A: SelfAdjointOperator<S> + 'static>(op: A) -> Self {
        Op::linear(SelfAdjoint::new(op))
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Op::Linear(_))
    }

    /// The linear view of this operator, if it has one.
    pub fn as_linear(&self) -> Option<&Arc<dyn LinearOperator<S>>> {
        match self {
            Op::Linear(op) => Some(op),
            Op::Nonlinear(_) => None,
        }
    }

    /// The linear view, or a compatibility error naming `context`.
    pub(crate) fn require_linear(&self, context: &str) -> Result<Arc<dyn LinearOperator<S>>, OpError> {
        match self {
            Op::Linear(op) => Ok(Arc::clone(op)),
            Op::Nonlinear(op) => Err(OpError::Compatibility(format!(
                "{op:?} is not a linear operator; {context} is only defined for linear operators"
            ))),
        }
    }

    /// Checked adjoint evaluation; fails for non-linear operators.
    pub fn apply_adjoint(&self, rhs: &S::Element, out: &mut S::Element) -> Result<(), OpError> {
        self.require_linear("the adjoint")?.apply_adjoint(rhs, out)
    }

    /// Adjoint evaluation into a fresh element of the domain; fails for non-linear operators.
    pub fn call_adjoint(&self, rhs: &S::Element) -> Result<S::Element, OpError> {
        self.require_linear("the adjoint")?.call_adjoint(rhs)
    }

    /// The adjoint operator Aᵀ.
    pub fn adjoint(&self) -> Result<Op<S>, OpError> {
        Ok(Op::linear(Adjoint::new(self.clone())?))
    }

    /// (A + B)(x) = A(x) + B(x)
    pub fn sum(&self, other: &Op<S>) -> Result<Op<S>, OpError> {
        if self.is_linear() && other.is_linear() {
            Ok(Op::linear(LinearSum::new(self.clone(), other.clone())?))
        } else {
            Ok(Op::new(Sum::new(self.clone(), other.clone())?))
        }
    }

    /// (A ∘ B)(x) = A(B(x)), with `self` as A.
    pub fn compose(&self, right: &Op<S>) -> Result<Op<S>, OpError> {
        if self.is_linear() && right.is_linear() {
            Ok(Op::linear(LinearComposition::new(self.clone(), right.clone())?))
        } else {
            Ok(Op::new(Composition::new(self.clone(), right.clone())?))
        }
    }

    /// (a·A)(x) = a·A(x): scales the output.
    pub fn scaled_left(&self, scalar: S::Scalar) -> Result<Op<S>, OpError> {
        match self {
            Op::Linear(_) => Ok(Op::linear(LinearScalarMultiplication::new(self.clone(), scalar)?)),
            Op::Nonlinear(_) => Ok(Op::new(LeftScalarMultiplication::new(self.clone(), scalar)?)),
        }
    }

    /// (A·a)(x) = A(a·x): scales the input.
    ///
    /// For linear operators this coincides with [`Op::scaled_left`] and costs the same; for
    /// non-linear operators it needs a copy of the input on every evaluation, so prefer left
    /// multiplication when either is acceptable.
    pub fn scaled_right(&self, scalar: S::Scalar) -> Result<Op<S>, OpError> {
        match self {
            Op::Linear(_) => Ok(Op::linear(LinearScalarMultiplication::new(self.clone(), scalar)?)),
            Op::Nonlinear(_) => Ok(Op::new(RightScalarMultiplication::new(self.clone(), scalar)?)),
        }
    }

    /// `self + other`; only operators can be added.
    pub fn add(&self, other: impl Into<Operand<S>>) -> Result<Op<S>, OpError> {
        match other.into() {
            Operand::Operator(op) => self.sum(&op),
            Operand::Scalar(a) => Err(OpError::Capability(format!(
                "expected an operator to add to {self:?}, got the scalar {a:?}"
            ))),
        }
    }

    /// `other * self`, i.e. left multiplication by a scalar.
    pub fn lmul(&self, other: impl Into<Operand<S>>) -> Result<Op<S>, OpError> {
        match other.into() {
            Operand::Scalar(a) => self.scaled_left(a),
            Operand::Operator(op) => Err(OpError::Capability(format!(
                "expected a scalar to multiply {self:?} with, got the operator {op:?}"
            ))),
        }
    }

    /// `self * other`, i.e. right multiplication by a scalar.
    pub fn rmul(&self, other: impl Into<Operand<S>>) -> Result<Op<S>, OpError> {
        match other.into() {
            Operand::Scalar(a) => self.scaled_right(a),
            Operand::Operator(op) => Err(OpError::Capability(format!(
                "expected a scalar to multiply {self:?} with, got the operator {op:?}"
            ))),
        }
    }
}

impl<S: Space> Op<S>
where
    S::Element: PointwiseMul,
{
    /// (A ⊙ B)(x) = A(x) ⊙ B(x). Never linear, so the result has no adjoint.
    pub fn pointwise_product(&self, other: &Op<S>) -> Result<Op<S>, OpError> {
        Ok(Op::new(PointwiseProduct::new(self.clone(), other.clone())?))
    }
}

impl<S: Space> Operator<S> for Op<S> {
    fn domain(&self) -> &S {
        match self {
            Op::Nonlinear(op) => op.domain(),
            Op::Linear(op) => op.domain(),
        }
    }

    fn range(&self) -> &S {
        match self {
            Op::Nonlinear(op) => op.range(),
            Op::Linear(op) => op.range(),
        }
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        match self {
            Op::Nonlinear(op) => op.apply_impl(rhs, out),
            Op::Linear(op) => op.apply_impl(rhs, out),
        }
    }

    /// A linear map is its own derivative at every point.
    fn derivative(&self, point: &S::Element) -> Result<Op<S>, OpError> {
        match self {
            Op::Nonlinear(op) => op.derivative(point),
            Op::Linear(_) => Ok(self.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wrappers::{Rn, RnVector};
    use crate::matrix::ScalingOperator;

    #[derive(Debug)]
    struct Cube {
        space: Rn<f64>,
    }

    impl Operator<Rn<f64>> for Cube {
        fn domain(&self) -> &Rn<f64> {
            &self.space
        }
        fn range(&self) -> &Rn<f64> {
            &self.space
        }
        fn apply_impl(&self, rhs: &RnVector<f64>, out: &mut RnVector<f64>) {
            for (o, x) in out.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
                *o = x * x * x;
            }
        }
    }

    #[test]
    fn builders_keep_linearity_only_when_all_operands_are_linear() {
        let space = Rn::<f64>::new(2);
        let a = Op::self_adjoint(ScalingOperator::new(space.clone(), 2.0));
        let b = Op::self_adjoint(ScalingOperator::new(space.clone(), 3.0));
        let c = Op::new(Cube { space });
        assert!(a.sum(&b).unwrap().is_linear());
        assert!(a.compose(&b).unwrap().is_linear());
        assert!(a.scaled_right(2.0).unwrap().is_linear());
        assert!(!a.sum(&c).unwrap().is_linear());
        assert!(!c.compose(&a).unwrap().is_linear());
        assert!(!c.scaled_left(2.0).unwrap().is_linear());
        assert!(!a.pointwise_product(&b).unwrap().is_linear());
    }

    #[test]
    fn operand_tags_are_checked() {
        let space = Rn::<f64>::new(2);
        let a = Op::self_adjoint(ScalingOperator::new(space, 2.0));
        assert!(matches!(a.add(Operand::scalar(1.0)), Err(OpError::Capability(_))));
        assert!(matches!(a.lmul(&a), Err(OpError::Capability(_))));
        assert!(matches!(a.rmul(a.clone()), Err(OpError::Capability(_))));
        assert!(a.add(&a).is_ok());
        assert!(a.lmul(Operand::scalar(3.0)).is_ok());
    }

    #[test]
    fn derivative_of_linear_is_itself() {
        let space = Rn::<f64>::new(2);
        let a = Op::self_adjoint(ScalingOperator::new(space.clone(), 2.0));
        let d = a.derivative(&space.zero()).unwrap();
        let x = RnVector::from(vec![1.0, -1.0]);
        assert_eq!(d.call(&x).unwrap(), a.call(&x).unwrap());

        let c = Op::new(Cube { space: space.clone() });
        assert!(matches!(c.derivative(&space.zero()), Err(OpError::Unsupported(_))));
    }

    #[test]
    fn adjoint_requires_linearity() {
        let space = Rn::<f64>::new(2);
        let c = Op::new(Cube { space: space.clone() });
        assert!(matches!(c.adjoint(), Err(OpError::Compatibility(_))));
        let mut out = space.zero();
        assert!(matches!(
            c.apply_adjoint(&space.full(1.0), &mut out),
            Err(OpError::Compatibility(_))
        ));
    }
}
