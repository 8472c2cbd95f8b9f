use std::error::Error;

use fnbridge_types::{KindMismatch, NotSupported};
use thiserror::Error;

/// The error returned by every generic call.
///
/// The layer never recovers from any of these: a failure is handed back to
/// the immediate caller exactly as it was raised.
#[derive(Error, Debug)]
pub enum CallError {
    /// An argument did not hold the kind its position is specialized for.
    #[error(transparent)]
    KindMismatch(#[from] KindMismatch),

    /// The requested operation is not implemented for this arity.
    #[error(transparent)]
    NotSupported(#[from] NotSupported),

    /// A tupled function received something other than a tuple of its arity.
    #[error(
        "expected a tuple of {expected} values, found {}",
        .found.map_or_else(|| "a non-tuple value".to_string(), |n| format!("a tuple of {n} values"))
    )]
    TupleMismatch {
        /// The arity of the underlying function.
        expected: usize,
        /// The length of the supplied tuple, `None` if it was not a tuple.
        found: Option<usize>,
    },

    /// The wrapped implementation failed. The original error is kept as is.
    #[error(transparent)]
    User(Box<dyn Error + Send + Sync>),
}

impl CallError {
    /// Creates a `CallError` carrying an error raised by a wrapped
    /// implementation.
    pub fn user(error: Box<dyn Error + Send + Sync>) -> Self {
        Self::User(error)
    }

    /// Attempts to downcast the `CallError` to the error raised by the wrapped
    /// implementation.
    pub fn downcast<T: Error + 'static>(self) -> Result<T, Self> {
        match self {
            // We only try to downcast user errors
            Self::User(err) => match err.downcast::<T>() {
                Ok(err) => Ok(*err),
                Err(err) => Err(Self::User(err)),
            },
            other => Err(other),
        }
    }

    /// Attempts to downcast the `CallError` to the error raised by the wrapped
    /// implementation.
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        match self {
            Self::User(err) => err.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Returns true if the `CallError` carries a user error of type `T`.
    pub fn is<T: Error + 'static>(&self) -> bool {
        match self {
            Self::User(err) => err.is::<T>(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnbridge_types::Kind;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Overflow;

    impl fmt::Display for Overflow {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "overflow")
        }
    }

    impl Error for Overflow {}

    #[test]
    fn downcast_user_error() {
        let err = CallError::user(Box::new(Overflow));
        assert!(err.is::<Overflow>());
        assert_eq!(err.downcast_ref::<Overflow>(), Some(&Overflow));
        assert_eq!(err.to_string(), "overflow");
        assert_eq!(err.downcast::<Overflow>().ok(), Some(Overflow));
    }

    #[test]
    fn downcast_keeps_other_errors() {
        let err = CallError::from(KindMismatch::new(Kind::I32, Kind::Bool));
        assert!(!err.is::<Overflow>());
        let err = err.downcast::<Overflow>().unwrap_err();
        assert!(matches!(
            err,
            CallError::KindMismatch(KindMismatch {
                expected: Kind::I32,
                found: Kind::Bool
            })
        ));
    }

    #[test]
    fn tuple_mismatch_message() {
        let err = CallError::TupleMismatch {
            expected: 2,
            found: Some(3),
        };
        assert_eq!(err.to_string(), "expected a tuple of 2 values, found a tuple of 3 values");
        let err = CallError::TupleMismatch {
            expected: 2,
            found: None,
        };
        assert_eq!(err.to_string(), "expected a tuple of 2 values, found a non-tuple value");
    }
}
