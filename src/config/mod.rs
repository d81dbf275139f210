//! Solver configuration.

pub mod options;
pub use options::{SolverKind, SolverOptions};
