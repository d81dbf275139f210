//! opalg: an algebra of functional-analytic operators
//!
//! This crate provides operators between abstract vector spaces together with their algebra:
//! sums, compositions, pointwise products, scalar multiples and adjoints are built lazily from
//! shared operands and evaluated on demand. Linear structure is tracked in the type of every
//! expression, so adjoints of composite linear operators come for free. Landweber and CGN
//! reconstruction solvers are built on the checked evaluation entry points.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod operator;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use operator::*;
pub use solver::*;
pub use utils::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
