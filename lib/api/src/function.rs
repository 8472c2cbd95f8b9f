//! The generic function contracts.
//!
//! There is exactly one contract per arity, from [`Function1`] to
//! [`Function22`]. A contract only knows about [`Value`]s: whoever holds one
//! pays for boxing its arguments and unboxing its result. Failures of the
//! implementation behind a contract are returned unchanged.

use std::fmt;
use std::sync::Arc;

use fnbridge_types::FunctionType;

use crate::error::CallError;
use crate::value::{FuncRef, Value};

macro_rules! function_contract {
    ( $name:ident, $arity:literal, $( $v:ident ),+ ) => {
        #[doc = concat!("The generic contract of functions taking ", stringify!($arity), " argument(s).")]
        pub trait $name: Send + Sync {
            /// Applies the function to its arguments.
            fn apply(&self, $( $v: Value ),+ ) -> Result<Value, CallError>;

            /// The signature of this function. Unspecialized contracts report
            /// `Erased` for every position.
            fn ty(&self) -> FunctionType {
                FunctionType::erased($arity)
            }
        }

        impl<T> $name for Arc<T>
        where
            T: $name + ?Sized,
        {
            #[inline]
            fn apply(&self, $( $v: Value ),+ ) -> Result<Value, CallError> {
                (**self).apply( $( $v ),+ )
            }

            fn ty(&self) -> FunctionType {
                (**self).ty()
            }
        }

        impl<T> $name for Box<T>
        where
            T: $name + ?Sized,
        {
            #[inline]
            fn apply(&self, $( $v: Value ),+ ) -> Result<Value, CallError> {
                (**self).apply( $( $v ),+ )
            }

            fn ty(&self) -> FunctionType {
                (**self).ty()
            }
        }
    };
}

function_contract!(Function1, 1, v1);
function_contract!(Function2, 2, v1, v2);
function_contract!(Function3, 3, v1, v2, v3);
function_contract!(Function4, 4, v1, v2, v3, v4);
function_contract!(Function5, 5, v1, v2, v3, v4, v5);
function_contract!(Function6, 6, v1, v2, v3, v4, v5, v6);
function_contract!(Function7, 7, v1, v2, v3, v4, v5, v6, v7);
function_contract!(Function8, 8, v1, v2, v3, v4, v5, v6, v7, v8);
function_contract!(Function9, 9, v1, v2, v3, v4, v5, v6, v7, v8, v9);
function_contract!(Function10, 10, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10);
function_contract!(Function11, 11, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11);
function_contract!(Function12, 12, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12);
function_contract!(Function13, 13, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13);
function_contract!(Function14, 14, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14);
function_contract!(
    Function15, 15, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15
);
function_contract!(
    Function16, 16, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16
);
function_contract!(
    Function17, 17, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17
);
function_contract!(
    Function18, 18, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17,
    v18
);
function_contract!(
    Function19, 19, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17,
    v18, v19
);
function_contract!(
    Function20, 20, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17,
    v18, v19, v20
);
function_contract!(
    Function21, 21, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17,
    v18, v19, v20, v21
);
function_contract!(
    Function22, 22, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17,
    v18, v19, v20, v21, v22
);

impl fmt::Debug for dyn Function1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function1({})", self.ty())
    }
}

/// `first` followed by `second`.
struct AndThen {
    first: FuncRef,
    second: FuncRef,
}

impl Function1 for AndThen {
    fn apply(&self, v1: Value) -> Result<Value, CallError> {
        let intermediate = self.first.apply(v1)?;
        self.second.apply(intermediate)
    }

    fn ty(&self) -> FunctionType {
        FunctionType::new(self.first.ty().params(), self.second.ty().result())
    }
}

impl dyn Function1 {
    /// Composes two functions: the result applies `self` and then `next` to
    /// its output.
    ///
    /// A failure of `self` is returned without calling `next`.
    pub fn and_then(self: Arc<Self>, next: FuncRef) -> FuncRef {
        Arc::new(AndThen {
            first: self,
            second: next,
        })
    }

    /// Composes two functions: the result applies `before` and then `self`
    /// to its output.
    pub fn compose(self: Arc<Self>, before: FuncRef) -> FuncRef {
        Arc::new(AndThen {
            first: before,
            second: self,
        })
    }
}
