//! Scalar multiples of the identity, x ↦ c·x, on any space.

use crate::core::traits::{Element, Space};
use crate::operator::{Operator, SelfAdjointOperator};

/// Scalar multiple of the identity, c·I. Self-adjoint for real c; wrap it with
/// [`Op::self_adjoint`](crate::operator::Op::self_adjoint) to use its adjoint.
#[derive(Debug, Clone)]
pub struct ScalingOperator<S: Space> {
    space: S,
    scale: S::Scalar,
}

impl<S: Space> ScalingOperator<S> {
    pub fn new(space: S, scale: S::Scalar) -> Self {
        Self { space, scale }
    }

    /// The identity on `space`.
    pub fn identity(space: S) -> Self {
        Self::new(space, num_traits::One::one())
    }

    pub fn scale(&self) -> S::Scalar {
        self.scale
    }
}

impl<S: Space> Operator<S> for ScalingOperator<S> {
    fn domain(&self) -> &S {
        &self.space
    }

    fn range(&self) -> &S {
        &self.space
    }

    fn apply_impl(&self, rhs: &S::Element, out: &mut S::Element) {
        out.clone_from(rhs);
        out.scale_in_place(self.scale);
    }
}

impl<S: Space> SelfAdjointOperator<S> for ScalingOperator<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wrappers::{Rn, RnVector};
    use crate::operator::{LinearOperator, Op, SelfAdjoint};

    #[test]
    fn scales_and_is_self_adjoint() {
        let op = SelfAdjoint::new(ScalingOperator::new(Rn::<f64>::new(3), 2.0));
        let x = RnVector::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(op.call(&x).unwrap().as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!(op.call_adjoint(&x).unwrap(), op.call(&x).unwrap());
        assert_eq!(op.inner().scale(), 2.0);
    }

    #[test]
    fn self_adjoint_builder_is_linear() {
        let op = Op::self_adjoint(ScalingOperator::new(Rn::<f64>::new(2), -1.5));
        assert!(op.is_linear());
        let y = RnVector::from(vec![2.0, 4.0]);
        assert_eq!(op.call_adjoint(&y).unwrap().as_slice(), &[-3.0, -6.0]);
    }

    #[test]
    fn identity_copies() {
        let op = ScalingOperator::identity(Rn::<f64>::new(2));
        let x = RnVector::from(vec![-1.0, 5.0]);
        assert_eq!(op.call(&x).unwrap(), x);
    }
}
