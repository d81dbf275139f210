//! Vector-space contracts consumed by the operator algebra, plus the `Rⁿ` reference space.

pub mod traits;
pub mod wrappers;

pub use traits::{Element, PointwiseMul, Reals, Space};
pub use wrappers::{Rn, RnVector};
