//! Specialized function variants and the bridges that expose them through
//! the generic contracts.
//!
//! A [`Specialized`] wraps a closure over native values. Called directly
//! through `apply_specialized`, no value is ever boxed. Called through its
//! `FunctionN` implementation, every primitive argument is unboxed exactly
//! once, the closure runs, and a primitive result is boxed exactly once.

use std::fmt;
use std::marker::PhantomData;

use fnbridge_types::FunctionType;

use crate::error::CallError;
use crate::function::*;
use crate::native::{IntoResult, NativeReturn, NativeTypeList, NativeValue};
use crate::value::Value;

/// A function value specialized for the native parameter types `Args` (a
/// tuple) and the native return type `Ret`.
///
/// # Examples
///
/// ```
/// use fnbridge::{Function2, Specialized, Value};
///
/// let add = Specialized::new(|a: i32, b: i32| a.wrapping_add(b));
/// assert_eq!(add.apply_specialized(2, 3), 5);
/// assert_eq!(add.apply(Value::I32(2), Value::I32(3)).unwrap(), Value::I32(5));
/// assert_eq!(add.ty().to_string(), "[I32, I32] -> I32");
/// ```
pub struct Specialized<Args, Ret, F> {
    func: F,
    _phantom: PhantomData<fn(Args) -> Ret>,
}

/// A specialized function whose result is `Void`.
///
/// Called through its generic contract it returns [`Value::Unit`].
pub type Procedure<Args, F> = Specialized<Args, (), F>;

/// The trait implemented by every closure that can back a [`Specialized`]
/// of the given parameter tuple and return type.
///
/// This trait is sealed in practice: it is implemented for every
/// `Fn(A1, .., AN) -> R` with `1 <= N <= 22` and has nothing to offer to
/// other implementors.
pub trait SpecializedFn<Args, Ret, RetAsResult>: Send + Sync
where
    Args: NativeTypeList,
    Ret: NativeReturn,
    RetAsResult: IntoResult<Ret>,
{
    /// Calls the closure with its native arguments packed in a tuple.
    fn call_native(&self, args: Args) -> RetAsResult;
}

impl<Args, Ret, F> Specialized<Args, Ret, F>
where
    Args: NativeTypeList,
    Ret: NativeReturn,
{
    /// Creates a specialized function from a closure over native values.
    ///
    /// The parameter and return kinds are read off the closure's signature.
    /// A closure returning `Result<Ret, E>` reports its failures as
    /// [`CallError::User`] when called through the generic contract.
    pub fn new<RetAsResult>(func: F) -> Self
    where
        F: SpecializedFn<Args, Ret, RetAsResult>,
        RetAsResult: IntoResult<Ret>,
    {
        Self {
            func,
            _phantom: PhantomData,
        }
    }

    /// The signature this variant is specialized for.
    pub fn signature(&self) -> FunctionType {
        FunctionType::new(Args::kinds(), Ret::RETURN_KIND)
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        Args::ARITY
    }

    /// Unwraps the underlying closure.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<Args, Ret, F> Clone for Specialized<Args, Ret, F>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<Args, Ret, F> fmt::Debug for Specialized<Args, Ret, F>
where
    Args: NativeTypeList,
    Ret: NativeReturn,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specialized")
            .field("ty", &self.signature())
            .finish()
    }
}

macro_rules! impl_specialized {
    ( $contract:ident; $( $x:ident $v:ident ),+ ) => {
        impl< $( $x, )+ Ret, RetAsResult, Func > SpecializedFn<( $( $x, )+ ), Ret, RetAsResult> for Func
        where
            $( $x: NativeValue, )+
            Ret: NativeReturn,
            RetAsResult: IntoResult<Ret>,
            Func: Fn( $( $x ),+ ) -> RetAsResult + Send + Sync,
        {
            #[inline]
            fn call_native(&self, ( $( $v, )+ ): ( $( $x, )+ )) -> RetAsResult {
                self( $( $v ),+ )
            }
        }

        impl< $( $x, )+ Ret, RetAsResult, Func > Specialized<( $( $x, )+ ), Ret, Func>
        where
            $( $x: NativeValue, )+
            Ret: NativeReturn,
            RetAsResult: IntoResult<Ret>,
            Func: Fn( $( $x ),+ ) -> RetAsResult + Send + Sync,
        {
            /// Calls the specialized body directly. No value is boxed or
            /// unboxed on this path.
            #[inline]
            pub fn apply_specialized(&self, $( $v: $x ),+ ) -> RetAsResult {
                (self.func)( $( $v ),+ )
            }
        }

        impl< $( $x, )+ Ret, RetAsResult, Func > $contract for Specialized<( $( $x, )+ ), Ret, Func>
        where
            $( $x: NativeValue, )+
            Ret: NativeReturn,
            RetAsResult: IntoResult<Ret>,
            Func: Fn( $( $x ),+ ) -> RetAsResult + Send + Sync,
        {
            fn apply(&self, $( $v: Value ),+ ) -> Result<Value, CallError> {
                // Arguments are unboxed left to right; the first mismatch
                // returns before the body runs.
                let result = (self.func)( $( <$x as NativeValue>::from_value($v)? ),+ );
                let result = result
                    .into_result()
                    .map_err(|error| CallError::user(Box::new(error)))?;
                Ok(result.into_return_value())
            }

            fn ty(&self) -> FunctionType {
                self.signature()
            }
        }
    };
}

impl_specialized!(Function1; A1 v1);
impl_specialized!(Function2; A1 v1, A2 v2);
impl_specialized!(Function3; A1 v1, A2 v2, A3 v3);
impl_specialized!(Function4; A1 v1, A2 v2, A3 v3, A4 v4);
impl_specialized!(Function5; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5);
impl_specialized!(Function6; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6);
impl_specialized!(Function7; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7);
impl_specialized!(Function8; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8);
impl_specialized!(Function9; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9);
impl_specialized!(
    Function10; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10
);
impl_specialized!(
    Function11; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11
);
impl_specialized!(
    Function12; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12
);
impl_specialized!(
    Function13; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13
);
impl_specialized!(
    Function14; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13, A14 v14
);
impl_specialized!(
    Function15; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13, A14 v14, A15 v15
);
impl_specialized!(
    Function16; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13, A14 v14, A15 v15, A16 v16
);
impl_specialized!(
    Function17; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13, A14 v14, A15 v15, A16 v16, A17 v17
);
impl_specialized!(
    Function18; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13, A14 v14, A15 v15, A16 v16, A17 v17, A18 v18
);
impl_specialized!(
    Function19; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13, A14 v14, A15 v15, A16 v16, A17 v17, A18 v18, A19 v19
);
impl_specialized!(
    Function20; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13, A14 v14, A15 v15, A16 v16, A17 v17, A18 v18, A19 v19, A20 v20
);
impl_specialized!(
    Function21; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13, A14 v14, A15 v15, A16 v16, A17 v17, A18 v18, A19 v19, A20 v20,
    A21 v21
);
impl_specialized!(
    Function22; A1 v1, A2 v2, A3 v3, A4 v4, A5 v5, A6 v6, A7 v7, A8 v8, A9 v9, A10 v10,
    A11 v11, A12 v12, A13 v13, A14 v14, A15 v15, A16 v16, A17 v17, A18 v18, A19 v19, A20 v20,
    A21 v21, A22 v22
);
