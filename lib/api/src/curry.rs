//! Curried and tupled views of the generic contracts.
//!
//! Both transforms are defined for every arity up to
//! [`CURRY_ARITY_LIMIT`](fnbridge_types::CURRY_ARITY_LIMIT). Asking for them on
//! a wider function fails with [`NotSupported`]; nothing is computed.
//!
//! A curried function takes the first argument and returns the curried form
//! of the remaining ones as a [`Value::Func`]. Every intermediate function is
//! an ordinary value: it can be applied any number of times.

use std::sync::Arc;

use fnbridge_types::{Kind, KindMismatch, NotSupported, curry_supported};

use crate::error::CallError;
use crate::function::*;
use crate::value::{FuncRef, Value};

#[cold]
fn not_supported(operation: &'static str, arity: usize) -> NotSupported {
    tracing::debug!(operation, arity, "transform not supported");
    NotSupported { operation, arity }
}

/// The items of a tupled argument. `arity` is only used to report errors.
fn tuple_items(value: &Value, arity: usize) -> Result<&[Value], CallError> {
    match value {
        Value::Tuple(items) => Ok(items),
        other if other.kind().is_erased() => Err(CallError::TupleMismatch {
            expected: arity,
            found: None,
        }),
        other => Err(KindMismatch::new(Kind::Erased, other.kind()).into()),
    }
}

struct Tupled1 {
    inner: Arc<dyn Function1>,
}

impl Function1 for Tupled1 {
    fn apply(&self, args: Value) -> Result<Value, CallError> {
        match tuple_items(&args, 1)? {
            [v1] => self.inner.apply(v1.clone()),
            items => Err(CallError::TupleMismatch {
                expected: 1,
                found: Some(items.len()),
            }),
        }
    }
}

impl dyn Function1 {
    /// A single-argument function is its own curried form.
    pub fn curried(self: Arc<Self>) -> Result<FuncRef, NotSupported> {
        Ok(self)
    }

    /// Returns a function taking a one-element [`Value::Tuple`].
    pub fn tupled(self: Arc<Self>) -> Result<FuncRef, NotSupported> {
        Ok(Arc::new(Tupled1 { inner: self }))
    }
}

macro_rules! impl_curry {
    (
        $contract:ident, $arity:literal, $bound:ident => $rest:ident,
        $curried:ident, $tupled:ident;
        $first:ident $(, $v:ident )+
    ) => {
        /// The function with its first argument fixed.
        struct $bound {
            inner: Arc<dyn $contract>,
            first: Value,
        }

        impl $rest for $bound {
            fn apply(&self, $( $v: Value ),+ ) -> Result<Value, CallError> {
                self.inner.apply(self.first.clone(), $( $v ),+ )
            }
        }

        struct $curried {
            inner: Arc<dyn $contract>,
        }

        impl Function1 for $curried {
            fn apply(&self, $first: Value) -> Result<Value, CallError> {
                let rest: Arc<dyn $rest> = Arc::new($bound {
                    inner: Arc::clone(&self.inner),
                    first: $first,
                });
                Ok(Value::Func(rest.curried()?))
            }
        }

        struct $tupled {
            inner: Arc<dyn $contract>,
        }

        impl Function1 for $tupled {
            fn apply(&self, args: Value) -> Result<Value, CallError> {
                match tuple_items(&args, $arity)? {
                    [$first $(, $v )+] => self.inner.apply($first.clone() $(, $v.clone() )+),
                    items => Err(CallError::TupleMismatch {
                        expected: $arity,
                        found: Some(items.len()),
                    }),
                }
            }
        }

        impl dyn $contract {
            /// Returns the curried form of this function.
            ///
            /// Fails with [`NotSupported`] above
            /// [`CURRY_ARITY_LIMIT`](fnbridge_types::CURRY_ARITY_LIMIT).
            pub fn curried(self: Arc<Self>) -> Result<FuncRef, NotSupported> {
                if !curry_supported($arity) {
                    return Err(not_supported("curried", $arity));
                }
                Ok(Arc::new($curried { inner: self }))
            }

            /// Returns a function taking all arguments as one
            /// [`Value::Tuple`].
            ///
            /// Fails with [`NotSupported`] above
            /// [`CURRY_ARITY_LIMIT`](fnbridge_types::CURRY_ARITY_LIMIT).
            pub fn tupled(self: Arc<Self>) -> Result<FuncRef, NotSupported> {
                if !curry_supported($arity) {
                    return Err(not_supported("tupled", $arity));
                }
                Ok(Arc::new($tupled { inner: self }))
            }
        }
    };
}

impl_curry!(Function2, 2, Bound2 => Function1, Curried2, Tupled2; v1, v2);
impl_curry!(Function3, 3, Bound3 => Function2, Curried3, Tupled3; v1, v2, v3);
impl_curry!(Function4, 4, Bound4 => Function3, Curried4, Tupled4; v1, v2, v3, v4);
impl_curry!(Function5, 5, Bound5 => Function4, Curried5, Tupled5; v1, v2, v3, v4, v5);
impl_curry!(Function6, 6, Bound6 => Function5, Curried6, Tupled6; v1, v2, v3, v4, v5, v6);
impl_curry!(
    Function7, 7, Bound7 => Function6, Curried7, Tupled7; v1, v2, v3, v4, v5, v6, v7
);
impl_curry!(
    Function8, 8, Bound8 => Function7, Curried8, Tupled8; v1, v2, v3, v4, v5, v6, v7, v8
);
impl_curry!(
    Function9, 9, Bound9 => Function8, Curried9, Tupled9; v1, v2, v3, v4, v5, v6, v7, v8, v9
);
impl_curry!(
    Function10, 10, Bound10 => Function9, Curried10, Tupled10;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10
);
impl_curry!(
    Function11, 11, Bound11 => Function10, Curried11, Tupled11;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11
);
impl_curry!(
    Function12, 12, Bound12 => Function11, Curried12, Tupled12;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12
);
impl_curry!(
    Function13, 13, Bound13 => Function12, Curried13, Tupled13;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13
);
impl_curry!(
    Function14, 14, Bound14 => Function13, Curried14, Tupled14;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14
);
impl_curry!(
    Function15, 15, Bound15 => Function14, Curried15, Tupled15;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15
);
impl_curry!(
    Function16, 16, Bound16 => Function15, Curried16, Tupled16;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16
);
impl_curry!(
    Function17, 17, Bound17 => Function16, Curried17, Tupled17;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17
);
impl_curry!(
    Function18, 18, Bound18 => Function17, Curried18, Tupled18;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17, v18
);
impl_curry!(
    Function19, 19, Bound19 => Function18, Curried19, Tupled19;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17, v18, v19
);
impl_curry!(
    Function20, 20, Bound20 => Function19, Curried20, Tupled20;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17, v18, v19, v20
);
impl_curry!(
    Function21, 21, Bound21 => Function20, Curried21, Tupled21;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17, v18, v19, v20,
    v21
);
impl_curry!(
    Function22, 22, Bound22 => Function21, Curried22, Tupled22;
    v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16, v17, v18, v19, v20,
    v21, v22
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specialized::Specialized;
    use fnbridge_types::{CURRY_ARITY_LIMIT, MAX_ARITY};

    fn sub() -> Arc<dyn Function2> {
        Arc::new(Specialized::new(|a: i32, b: i32| a - b))
    }

    #[test]
    fn curried_applies_one_argument_at_a_time() {
        let curried = sub().curried().unwrap();
        let partial = curried.apply(Value::I32(10)).unwrap();
        let partial = partial.func().unwrap();
        assert_eq!(partial.apply(Value::I32(3)).unwrap(), Value::I32(7));
        // Partial applications are reusable.
        assert_eq!(partial.apply(Value::I32(4)).unwrap(), Value::I32(6));
    }

    #[test]
    fn curried_mismatch_surfaces_on_last_argument() {
        let curried = sub().curried().unwrap();
        let partial = curried.apply(Value::Bool(true)).unwrap();
        let err = partial.func().unwrap().apply(Value::I32(1)).unwrap_err();
        assert!(matches!(err, CallError::KindMismatch(_)));
    }

    #[test]
    fn tupled_spreads_items() {
        let tupled = sub().tupled().unwrap();
        let args = Value::tuple([Value::I32(10), Value::I32(3)]);
        assert_eq!(tupled.apply(args).unwrap(), Value::I32(7));
    }

    #[test]
    fn tupled_rejects_wrong_shapes() {
        let tupled = sub().tupled().unwrap();
        let err = tupled.apply(Value::tuple([Value::I32(1)])).unwrap_err();
        assert!(matches!(
            err,
            CallError::TupleMismatch {
                expected: 2,
                found: Some(1)
            }
        ));
        let err = tupled.apply(Value::I32(1)).unwrap_err();
        assert!(matches!(
            err,
            CallError::KindMismatch(KindMismatch {
                expected: Kind::Erased,
                found: Kind::I32
            })
        ));
    }

    #[test]
    fn single_argument_transforms() {
        let neg: FuncRef = Arc::new(Specialized::new(|a: i64| -a));
        let curried = Arc::clone(&neg).curried().unwrap();
        assert!(std::ptr::addr_eq(Arc::as_ptr(&curried), Arc::as_ptr(&neg)));
        let tupled = neg.tupled().unwrap();
        assert_eq!(
            tupled.apply(Value::tuple([Value::I64(5)])).unwrap(),
            Value::I64(-5)
        );
    }

    #[test]
    fn widest_arity_is_not_supported() {
        let f: Arc<dyn Function22> = Arc::new(Specialized::new(
            |a: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32,
             _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32,
             _: i32, _: i32| a,
        ));
        let err = Arc::clone(&f).curried().unwrap_err();
        assert_eq!(
            err,
            NotSupported {
                operation: "curried",
                arity: MAX_ARITY
            }
        );
        let err = f.tupled().unwrap_err();
        assert_eq!(err.operation, "tupled");
        assert!(CURRY_ARITY_LIMIT < MAX_ARITY);
    }
}
