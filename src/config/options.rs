//! Command-line or API options for the reconstruction solvers.
//!
//! This module provides the `SolverOptions` struct, which selects the iterative method
//! and its parameters: the relaxation factor ω for Landweber, and the tolerance and
//! iteration cap shared by all methods. `SolverKind` parses from the usual short names
//! so options can come straight from command-line arguments.

use crate::error::OpError;
use num_traits::Float;
use std::str::FromStr;

/// Available reconstruction solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    /// Landweber iteration, x ← x − ω Aᵀ(Ax − b)
    Landweber,
    /// Conjugate gradient on the normal equations AᵀA x = Aᵀb
    Cgn,
}

impl FromStr for SolverKind {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, OpError> {
        match s.to_ascii_lowercase().as_str() {
            "landweber" => Ok(SolverKind::Landweber),
            "cgn" | "cgnr" => Ok(SolverKind::Cgn),
            other => Err(OpError::Unsupported(format!("unknown solver kind `{other}`"))),
        }
    }
}

/// Solver type & parameters.
#[derive(Debug, Clone)]
pub struct SolverOptions<T> {
    /// Which iterative method to run
    pub kind: SolverKind,

    /// Relaxation factor ω for Landweber; must satisfy 0 < ω < 2/‖A‖²
    pub omega: T,

    /// Relative residual tolerance
    pub tol: T,

    /// Maximum number of iterations
    pub max_iters: usize,
}

impl<T: Float> Default for SolverOptions<T> {
    fn default() -> Self {
        Self {
            kind: SolverKind::Landweber,
            omega: T::one(),
            tol: T::from(1e-8).unwrap_or_else(T::epsilon),
            max_iters: 100,
        }
    }
}

impl<T: Float> SolverOptions<T> {
    pub fn with_kind(mut self, kind: SolverKind) -> Self {
        self.kind = kind;
        self
    }
    pub fn with_omega(mut self, omega: T) -> Self {
        self.omega = omega;
        self
    }
    pub fn with_tol(mut self, tol: T) -> Self {
        self.tol = tol;
        self
    }
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }
}
