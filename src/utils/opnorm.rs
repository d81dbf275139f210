//! Operator norm estimate by power iteration on AᵀA.
//!
//! ‖A‖² is the largest eigenvalue of AᵀA, so repeatedly applying AᵀA to a normalised vector
//! and measuring the growth converges to ‖A‖ from below. Used to choose step sizes, e.g.
//! `omega < 2 / ‖A‖²` for Landweber.

use crate::core::traits::{Element, Space};
use crate::error::OpError;
use crate::operator::{LinearOperator, Op, Operator};
use num_traits::{Float, One, Zero};

/// Estimate ‖A‖ with `niter` power iterations starting from `start`.
///
/// `start` should have a component along the dominant right singular vector; a constant
/// or random element almost always does.
pub fn power_method_opnorm<S: Space>(
    op: &Op<S>,
    start: &S::Element,
    niter: usize,
) -> Result<S::Scalar, OpError> {
    let a = op.require_linear("power_method_opnorm")?;
    let mut x = start.clone();
    let x_norm = x.norm_sq().sqrt();
    if x_norm == S::Scalar::zero() {
        return Err(OpError::Unsupported(
            "power iteration needs a non-zero starting element".into(),
        ));
    }
    x.scale_in_place(S::Scalar::one() / x_norm);

    let mut ax = a.range().empty();
    let mut atax = a.domain().empty();
    let mut opnorm = S::Scalar::zero();
    for i in 0..niter {
        a.apply(&x, &mut ax)?;
        a.apply_adjoint(&ax, &mut atax)?;
        let growth = atax.norm_sq().sqrt();
        if growth == S::Scalar::zero() {
            // x lies in the null space; A vanishes on the whole Krylov space
            return Ok(S::Scalar::zero());
        }
        opnorm = growth.sqrt();
        tracing::trace!(iteration = i + 1, ?opnorm, "power iteration");
        std::mem::swap(&mut x, &mut atax);
        x.scale_in_place(S::Scalar::one() / growth);
    }
    Ok(opnorm)
}
