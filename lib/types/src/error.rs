//! The errors raised at the boxing boundary.
use crate::Kind;
use thiserror::Error;

/// A generic value did not hold the kind a position was declared with.
///
/// This is a usage error: the layer never recovers from it, it is handed
/// back to whoever made the generic call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("kind mismatch: expected {expected}, found {found}")]
pub struct KindMismatch {
    /// The kind the position was declared with.
    pub expected: Kind,
    /// The runtime kind of the value that was supplied.
    pub found: Kind,
}

impl KindMismatch {
    /// Creates a new `KindMismatch`.
    pub fn new(expected: Kind, found: Kind) -> Self {
        Self { expected, found }
    }
}

/// An operation that is deliberately left unimplemented for an arity.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("`{operation}` is not supported for functions of arity {arity}")]
pub struct NotSupported {
    /// Name of the requested operation, e.g. `curried`.
    pub operation: &'static str,
    /// Arity of the function it was requested on.
    pub arity: usize,
}

/// A [`FunctionType`](crate::FunctionType) that no contract can have.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureError {
    /// Contracts only exist for arities `1..=MAX_ARITY`.
    #[error("arity {0} is outside the supported range 1..={max}", max = crate::MAX_ARITY)]
    ArityOutOfRange(usize),
    /// `Void` is only a valid result kind.
    #[error("parameter {0} is declared as Void")]
    VoidParameter(usize),
}
