#![deny(
    missing_docs,
    trivial_numeric_casts,
    unused_extern_crates,
    rustdoc::broken_intra_doc_links
)]
#![warn(unused_import_braces)]
#![allow(clippy::new_without_default)]
#![warn(
    clippy::mut_mut,
    clippy::nonminimal_bool,
    clippy::map_unwrap_or,
    clippy::print_stdout,
    clippy::unicode_not_nfc,
    clippy::use_self
)]

//! `fnbridge` lets generic call sites invoke functions over primitive values
//! without paying for boxing on every call.
//!
//! Every function value is reachable through a generic contract,
//! [`Function1`] to [`Function22`], which only speaks [`Value`]. A function
//! whose parameters or result are primitives can additionally be built as a
//! [`Specialized`] variant: callers that know the exact native signature
//! call it directly with no conversion at all, while generic callers go
//! through the bridge, which unboxes each primitive argument once and boxes
//! the primitive result once.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use fnbridge::{Function2, Specialized, Value};
//!
//! fn main() -> anyhow::Result<()> {
//!     let hypot = Specialized::new(|x: f64, y: f64| x.hypot(y));
//!
//!     // Direct path: native values in, native value out.
//!     assert_eq!(hypot.apply_specialized(3.0, 4.0), 5.0);
//!
//!     // Generic path: the same body behind the uniform contract.
//!     let generic: Arc<dyn Function2> = Arc::new(hypot);
//!     let result = generic.apply(Value::F64(3.0), Value::F64(4.0))?;
//!     assert_eq!(result, Value::F64(5.0));
//!
//!     // Curried and tupled views of the generic contract.
//!     let curried = Arc::clone(&generic).curried()?;
//!     let partial = curried.apply(Value::F64(3.0))?;
//!     let partial = partial.func().expect("curried functions return functions");
//!     assert_eq!(partial.apply(Value::F64(4.0))?, Value::F64(5.0));
//!
//!     let tupled = generic.tupled()?;
//!     let args = Value::tuple([Value::F64(3.0), Value::F64(4.0)]);
//!     assert_eq!(tupled.apply(args)?, Value::F64(5.0));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failures
//!
//! Nothing is ever recovered inside the layer. A generic argument of the
//! wrong kind fails with [`KindMismatch`] before the body runs; a failure
//! raised by the body comes back as [`CallError::User`] and can be
//! downcast to its original type; transforms above
//! [`CURRY_ARITY_LIMIT`] fail with [`NotSupported`].
//!
//! # Features
//!
//! * `enable-serde`: `Serialize`/`Deserialize` for [`Kind`] and
//!   [`FunctionType`].
//! * `high-arity-curry`: raises [`CURRY_ARITY_LIMIT`] from 8 to 21.

mod callback;
mod curry;
mod error;
mod function;
mod native;
mod reference;
mod specialized;
mod value;

pub use callback::{CompilerCallback, FnCallback, NoopCallback, TracingCallback};
pub use error::CallError;
pub use function::{
    Function1, Function2, Function3, Function4, Function5, Function6, Function7, Function8,
    Function9, Function10, Function11, Function12, Function13, Function14, Function15,
    Function16, Function17, Function18, Function19, Function20, Function21, Function22,
};
pub use native::{IntoResult, NativeReturn, NativeTypeList, NativeValue};
pub use reference::AnyRef;
pub use specialized::{Procedure, Specialized, SpecializedFn};
pub use value::{FuncRef, Value};

pub use fnbridge_types::{
    CURRY_ARITY_LIMIT, FunctionType, Kind, KindMismatch, MAX_ARITY, NativeKind, NotSupported,
    SignatureError, curry_supported,
};

/// Version number of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
