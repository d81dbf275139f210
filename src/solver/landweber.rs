//! Landweber iteration.
//!
//! Steepest descent on ½‖Ax − b‖² with a fixed step:
//!
//! x ← x − ω Aᵀ(Ax − b)
//!
//! The iteration converges to a least-squares solution for 0 < ω < 2/‖A‖²; see
//! [`power_method_opnorm`](crate::utils::opnorm::power_method_opnorm) for estimating ‖A‖.
//!
//! # References
//! - Landweber, L. (1951). An iteration formula for Fredholm integral equations of the first kind.
//! - Engl, Hanke, Neubauer (1996). Regularization of Inverse Problems, Ch. 6.

use crate::core::traits::{Element, Space};
use crate::error::OpError;
use crate::operator::{LinearOperator, Op, Operator};
use crate::solver::{LinearSolver, check_rhs};
use crate::utils::convergence::{Convergence, SolveStats};
use num_traits::{Float, One, Zero};

/// Landweber solver: relaxation factor and convergence parameters.
pub struct LandweberSolver<T> {
    pub conv: Convergence<T>,
    pub omega: T,
}

impl<T: Float> LandweberSolver<T> {
    pub fn new(omega: T, tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters }, omega }
    }
}

impl<S: Space> LinearSolver<S> for LandweberSolver<S::Scalar> {
    type Error = OpError;

    fn solve(
        &mut self,
        op: &Op<S>,
        rhs: &S::Element,
        x: &mut S::Element,
    ) -> Result<SolveStats<S::Scalar>, OpError> {
        let a = op.require_linear("Landweber iteration")?;
        check_rhs(op, rhs)?;
        let minus_one = -S::Scalar::one();

        // r = A x - b
        let mut r = a.range().empty();
        a.apply(x, &mut r)?;
        r.axpy(minus_one, rhs);
        let res0 = r.norm_sq().sqrt();
        let mut stats = SolveStats { iterations: 0, final_residual: res0, converged: res0 == S::Scalar::zero() };
        if stats.converged {
            return Ok(stats);
        }

        let mut grad = a.domain().empty();
        for i in 1..=self.conv.max_iters {
            a.apply_adjoint(&r, &mut grad)?;
            x.axpy(-self.omega, &grad);
            a.apply(x, &mut r)?;
            r.axpy(minus_one, rhs);
            let res_norm = r.norm_sq().sqrt();
            tracing::trace!(iteration = i, residual = ?res_norm, "landweber");
            let (stop, s) = self.conv.check(res_norm, res0, i);
            stats = s;
            if stop {
                break;
            }
        }
        tracing::debug!(iterations = stats.iterations, converged = stats.converged, "landweber finished");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wrappers::{Rn, RnVector};
    use crate::matrix::{MatrixOperator, ScalingOperator};

    #[test]
    fn landweber_solves_diagonal_system() {
        let a = Op::linear(MatrixOperator::from_raw(2, 2, &[2.0, 0.0, 0.0, 1.0]).unwrap());
        let b = RnVector::from(vec![4.0, 3.0]);
        let mut x = Rn::<f64>::new(2).zero();
        // ‖A‖² = 4, so ω = 0.4 < 0.5
        let mut solver = LandweberSolver::new(0.4, 1e-10, 500);
        let stats = solver.solve(&a, &b, &mut x).unwrap();
        assert!(stats.converged, "Landweber did not converge");
        assert!((x[0] - 2.0).abs() < 1e-8 && (x[1] - 3.0).abs() < 1e-8, "x = {:?}", x);
    }

    #[test]
    fn landweber_rejects_wrong_rhs() {
        let a = Op::self_adjoint(ScalingOperator::new(Rn::<f64>::new(2), 1.0));
        let mut x = Rn::<f64>::new(2).zero();
        let mut solver = LandweberSolver::new(0.5, 1e-10, 10);
        let err = solver.solve(&a, &RnVector::from(vec![1.0; 3]), &mut x).unwrap_err();
        assert!(matches!(err, OpError::Range(_)));
    }
}
