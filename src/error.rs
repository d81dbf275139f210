use thiserror::Error;

// Unified error type for opalg

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    #[error("element is not a member of the domain {0}")]
    Domain(String),
    #[error("element is not a member of the range {0}")]
    Range(String),
    #[error("input and output share storage; operators do not permit aliased arguments")]
    Aliasing,
    #[error("incompatible operands: {0}")]
    Compatibility(String),
    #[error("operand lacks the required capability: {0}")]
    Capability(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}
