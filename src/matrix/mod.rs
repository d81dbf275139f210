//! Concrete operators: dense matrices over `Rⁿ` and scalar multiples of the identity.

pub mod dense;
pub use dense::MatrixOperator;
pub mod scaling;
pub use scaling::ScalingOperator;
