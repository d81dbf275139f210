//! Convergence bookkeeping and operator-norm estimation for the solvers.

pub mod convergence;
pub mod opnorm;

pub use convergence::{Convergence, SolveStats};
pub use opnorm::power_method_opnorm;
