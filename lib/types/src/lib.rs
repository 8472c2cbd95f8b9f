//! These are the common types shared by the fnbridge specialization layer.
//!
//! This crate provides the primitive kind model (`Kind`), the signature
//! descriptor of a function value (`FunctionType`), the mapping from native
//! Rust types to kinds (`NativeKind`) and the leaf error types raised when a
//! generic value is unboxed against the wrong kind.

#![deny(missing_docs, unused_extern_crates)]
#![warn(unused_import_braces)]

pub mod error;
mod native;
mod types;

pub use crate::error::{KindMismatch, NotSupported, SignatureError};
pub use crate::native::NativeKind;
pub use crate::types::{FunctionType, Kind};

/// Version number of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The largest arity a function contract is defined for.
///
/// Contracts exist for every arity in `1..=MAX_ARITY` and for no other.
pub const MAX_ARITY: usize = 22;

/// The largest arity for which `curried` and `tupled` are implemented.
///
/// Higher arities fail with [`NotSupported`]. The bound is raised to 21 by the
/// `high-arity-curry` feature; `MAX_ARITY` itself is never curried.
#[cfg(not(feature = "high-arity-curry"))]
pub const CURRY_ARITY_LIMIT: usize = 8;

/// The largest arity for which `curried` and `tupled` are implemented.
///
/// Higher arities fail with [`NotSupported`]. `MAX_ARITY` itself is never
/// curried.
#[cfg(feature = "high-arity-curry")]
pub const CURRY_ARITY_LIMIT: usize = 21;

/// Returns whether `curried`/`tupled` are implemented for `arity`.
///
/// ```
/// use fnbridge_types::curry_supported;
///
/// assert!(curry_supported(2));
/// assert!(!curry_supported(22));
/// ```
pub const fn curry_supported(arity: usize) -> bool {
    arity >= 1 && arity <= CURRY_ARITY_LIMIT
}
