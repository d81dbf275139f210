//! CGN: conjugate gradient on the normal equations (Saad Ch 8.3, CGNR variant)
//!
//! Applies CG to AᵀA x = Aᵀb without forming AᵀA: every iteration costs one forward and one
//! adjoint evaluation. Suitable for non-square operators and least-squares problems.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems, Section 8.3.
//! - https://en.wikipedia.org/wiki/Conjugate_gradient_method#The_normal_equations

use crate::core::traits::{Element, Space};
use crate::error::OpError;
use crate::operator::{LinearOperator, Op, Operator};
use crate::solver::{LinearSolver, check_rhs};
use crate::utils::convergence::{Convergence, SolveStats};
use num_traits::{Float, One, Zero};

/// CGN solver struct.
///
/// Stores convergence parameters.
pub struct CgnSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Float> CgnSolver<T> {
    /// Create a new CGN solver with the given tolerance and maximum iterations.
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters } }
    }
}

impl<S: Space> LinearSolver<S> for CgnSolver<S::Scalar> {
    type Error = OpError;

    /// Solve the least-squares problem min ‖Ax − b‖.
    ///
    /// Convergence is measured on the residual b − Ax. When the normal-equation residual
    /// Aᵀ(b − Ax) vanishes, `x` is a least-squares solution and the run is reported as
    /// converged even if b is not in the range of A.
    fn solve(
        &mut self,
        op: &Op<S>,
        rhs: &S::Element,
        x: &mut S::Element,
    ) -> Result<SolveStats<S::Scalar>, OpError> {
        let a = op.require_linear("CGN")?;
        check_rhs(op, rhs)?;
        let zero = S::Scalar::zero();

        // d = b - A x
        let mut d = a.call(x)?;
        d.scale_in_place(-S::Scalar::one());
        d.add_in_place(rhs);
        // p = s = Aᵀ d
        let mut s = a.call_adjoint(&d)?;
        let mut p = s.clone();
        let mut q = a.range().empty();

        let res0 = d.norm_sq().sqrt();
        let mut norms2 = s.norm_sq();
        let mut stats = SolveStats { iterations: 0, final_residual: res0, converged: norms2 == zero };

        for i in 1..=self.conv.max_iters {
            if norms2 == zero {
                stats.converged = true;
                break;
            }
            a.apply(&p, &mut q)?;
            let alpha = norms2 / q.norm_sq();
            x.axpy(alpha, &p);
            d.axpy(-alpha, &q);
            a.apply_adjoint(&d, &mut s)?;
            let norms2_new = s.norm_sq();
            let res_norm = d.norm_sq().sqrt();
            tracing::trace!(iteration = i, residual = ?res_norm, "cgn");
            let (stop, st) = self.conv.check(res_norm, res0, i);
            stats = st;
            if stop {
                break;
            }
            // p = s + beta p
            let beta = norms2_new / norms2;
            p.scale_in_place(beta);
            p.add_in_place(&s);
            norms2 = norms2_new;
        }
        tracing::debug!(iterations = stats.iterations, converged = stats.converged, "cgn finished");
        Ok(stats)
    }
}
