//! Expression types for sums, compositions, pointwise products and scalar multiples.
//!
//! Each combinator owns shared handles to its operands and evaluates them into scratch
//! buffers from [`Space::temporary`], combining results in place. Compatibility of the
//! operands' domains and ranges is checked once, at construction.

use crate::core::traits::{Element, PointwiseMul, Space};
use crate::error::OpError;
use crate::operator::{Op, Operator};

/// Same domain and same range, as required by `Sum` and `PointwiseProduct`.
fn check_same_spaces<S: Space>(op1: &Op<S>, op2: &Op<S>) -> Result<(), OpError> {
    if op1.range() != op2.range() {
        return Err(OpError::Compatibility(format!(
            "ranges ({:?}, {:?}) of operators are not equal",
            op1.range(),
            op2.range()
        )));
    }
    if op1.domain() != op2.domain() {
        return Err(OpError::Compatibility(format!(
            "domains ({:?}, {:?}) of operators are not equal",
            op1.domain(),
            op2.domain()
        )));
    }
    Ok(())
}

/// Sum(op1, op2)(x) = op1(x) + op2(x)
#[derive(Debug)]
pub struct Sum<S: Space> {
    op1: Op<S>,
    op2: Op<S>,
}

impl<S: Space> Sum<S> {
    pub fn new(op1: Op<S>, op2: Op<S>) -> Result<Self, OpError> {
        check_same_spaces(&op1, &op2)?;
        tracing::debug!(kind = "sum", "built operator combinator");
        Ok(Self { op1, op2 })
    }
}

impl<S: Space> Operator<S> for Sum<S> {
    fn domain(&self) -> &S {
        self.op1.domain()
    }

    fn range(&self) -> &S {
        self.op1.range()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        let mut tmp = self.range().temporary();
        self.op1.apply_impl(rhs, out);
        self.op2.apply_impl(rhs, &mut tmp);
        out.add_in_place(&tmp);
    }
}

/// Composition(left, right)(x) = left(right(x))
#[derive(Debug)]
pub struct Composition<S: Space> {
    left: Op<S>,
    right: Op<S>,
}

impl<S: Space> Composition<S> {
    pub fn new(left: Op<S>, right: Op<S>) -> Result<Self, OpError> {
        if right.range() != left.domain() {
            return Err(OpError::Compatibility(format!(
                "range of right operator ({:?}) does not equal domain of left operator ({:?})",
                right.range(),
                left.domain()
            )));
        }
        tracing::debug!(kind = "composition", "built operator combinator");
        Ok(Self { left, right })
    }
}

impl<S: Space> Operator<S> for Composition<S> {
    fn domain(&self) -> &S {
        self.right.domain()
    }

    fn range(&self) -> &S {
        self.left.range()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        let mut tmp = self.right.range().temporary();
        self.right.apply_impl(rhs, &mut tmp);
        self.left.apply_impl(&tmp, out);
    }
}

/// Pointwise product of operators into an algebra:
/// PointwiseProduct(op1, op2)(x) = op1(x) ⊙ op2(x)
///
/// The product is not linear even when both factors are, so it has no adjoint.
#[derive(Debug)]
pub struct PointwiseProduct<S: Space> {
    op1: Op<S>,
    op2: Op<S>,
}

impl<S: Space> PointwiseProduct<S>
where
    S::Element: PointwiseMul,
{
    pub fn new(op1: Op<S>, op2: Op<S>) -> Result<Self, OpError> {
        check_same_spaces(&op1, &op2)?;
        tracing::debug!(kind = "pointwise_product", "built operator combinator");
        Ok(Self { op1, op2 })
    }
}

impl<S: Space> Operator<S> for PointwiseProduct<S>
where
    S::Element: PointwiseMul,
{
    fn domain(&self) -> &S {
        self.op1.domain()
    }

    fn range(&self) -> &S {
        self.op1.range()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        let mut tmp = self.op2.range().temporary();
        self.op1.apply_impl(rhs, out);
        self.op2.apply_impl(rhs, &mut tmp);
        out.mul_in_place(&tmp);
    }
}

/// LeftScalarMultiplication(op, a)(x) = a · op(x)
///
/// One evaluation of `op`, no scratch buffer.
#[derive(Debug)]
pub struct LeftScalarMultiplication<S: Space> {
    op: Op<S>,
    scalar: S::Scalar,
}

impl<S: Space> LeftScalarMultiplication<S> {
    pub fn new(op: Op<S>, scalar: S::Scalar) -> Result<Self, OpError> {
        let field = op.range().field();
        if !field.contains(scalar) {
            return Err(OpError::Capability(format!(
                "scalar {scalar:?} is not compatible with the field {field} of the range {:?}",
                op.range()
            )));
        }
        tracing::debug!(kind = "left_scalar_multiplication", "built operator combinator");
        Ok(Self { op, scalar })
    }

    pub fn scalar(&self) -> S::Scalar {
        self.scalar
    }
}

impl<S: Space> Operator<S> for LeftScalarMultiplication<S> {
    fn domain(&self) -> &S {
        self.op.domain()
    }

    fn range(&self) -> &S {
        self.op.range()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        self.op.apply_impl(rhs, out);
        out.scale_in_place(self.scalar);
    }
}

/// RightScalarMultiplication(op, a)(x) = op(a · x)
///
/// Costs a copy of the input on top of the evaluation, since `x` must stay untouched.
#[derive(Debug)]
pub struct RightScalarMultiplication<S: Space> {
    op: Op<S>,
    scalar: S::Scalar,
}

impl<S: Space> RightScalarMultiplication<S> {
    pub fn new(op: Op<S>, scalar: S::Scalar) -> Result<Self, OpError> {
        let field = op.domain().field();
        if !field.contains(scalar) {
            return Err(OpError::Capability(format!(
                "scalar {scalar:?} is not compatible with the field {field} of the domain {:?}",
                op.domain()
            )));
        }
        tracing::debug!(kind = "right_scalar_multiplication", "built operator combinator");
        Ok(Self { op, scalar })
    }

    pub fn scalar(&self) -> S::Scalar {
        self.scalar
    }
}

impl<S: Space> Operator<S> for RightScalarMultiplication<S> {
    fn domain(&self) -> &S {
        self.op.domain()
    }

    fn range(&self) -> &S {
        self.op.range()
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        let mut tmp = self.op.domain().temporary();
        tmp.clone_from(rhs);
        tmp.scale_in_place(self.scalar);
        self.op.apply_impl(&tmp, out);
    }
}
