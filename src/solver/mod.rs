//! Iterative reconstruction solvers built on the checked operator entry points.

use crate::config::options::{SolverKind, SolverOptions};
use crate::core::traits::Space;
use crate::error::OpError;
use crate::operator::Op;
use crate::utils::convergence::SolveStats;

/// Common interface for iterative solvers of A·x = b.
pub trait LinearSolver<S: Space> {
    type Error;
    /// Solve A·x = b (in the least-squares sense), starting from and writing into `x`.
    /// Returns iteration stats (including convergence info).
    fn solve(
        &mut self,
        op: &Op<S>,
        rhs: &S::Element,
        x: &mut S::Element,
    ) -> Result<SolveStats<S::Scalar>, Self::Error>;
}

pub mod landweber;
pub use landweber::LandweberSolver;

pub mod cgn;
pub use cgn::CgnSolver;

/// Run the solver selected by `options`.
pub fn solve_with_options<S: Space>(
    options: &SolverOptions<S::Scalar>,
    op: &Op<S>,
    rhs: &S::Element,
    x: &mut S::Element,
) -> Result<SolveStats<S::Scalar>, OpError> {
    match options.kind {
        SolverKind::Landweber => {
            let mut solver = LandweberSolver::new(options.omega, options.tol, options.max_iters);
            solver.solve(op, rhs, x)
        }
        SolverKind::Cgn => {
            let mut solver = CgnSolver::new(options.tol, options.max_iters);
            solver.solve(op, rhs, x)
        }
    }
}

/// `rhs` must lie in the range of the operator being inverted.
pub(crate) fn check_rhs<S: Space>(op: &Op<S>, rhs: &S::Element) -> Result<(), OpError> {
    use crate::operator::Operator;
    if op.range().contains(rhs) {
        Ok(())
    } else {
        Err(OpError::Range(format!("{:?}", op.range())))
    }
}
