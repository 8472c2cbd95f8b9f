//! Boxing and unboxing between native Rust values and [`Value`].
//!
//! This is the single conversion boundary of the crate: the bridge adapters
//! of specialized functions only ever convert through these traits.

use std::convert::Infallible;
use std::error::Error;

use fnbridge_types::{Kind, KindMismatch, NativeKind};

use crate::value::Value;

/// A type that can sit in a parameter position of a specialized function.
///
/// `from_value` is unboxing and `into_value` is boxing; for every value `v`,
/// `T::from_value(v.into_value())` gives back `v`.
pub trait NativeValue: Sized {
    /// Kind of this parameter position.
    const KIND: Kind;

    /// Unbox a generic value, failing if its runtime kind is not `Self::KIND`.
    fn from_value(value: Value) -> Result<Self, KindMismatch>;

    /// Box `self` into a generic value.
    fn into_value(self) -> Value;
}

macro_rules! native_value {
    ( $( $type:ty => $variant:ident ),* ) => {
        $(
            impl NativeValue for $type {
                const KIND: Kind = <$type as NativeKind>::KIND;

                #[inline]
                fn from_value(value: Value) -> Result<Self, KindMismatch> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(mismatch(<Self as NativeValue>::KIND, &other)),
                    }
                }

                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

native_value!(
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    bool => Bool
);

/// `Erased` positions take the generic value as is.
impl NativeValue for Value {
    const KIND: Kind = Kind::Erased;

    #[inline]
    fn from_value(value: Value) -> Result<Self, KindMismatch> {
        Ok(value)
    }

    #[inline]
    fn into_value(self) -> Value {
        self
    }
}

#[cold]
fn mismatch(expected: Kind, found: &Value) -> KindMismatch {
    let found = found.kind();
    tracing::debug!(%expected, %found, "unboxing failed");
    KindMismatch::new(expected, found)
}

/// A type that can be returned by a specialized function.
///
/// Every [`NativeValue`] qualifies; `()` additionally stands for `Void` and
/// boxes to the [`Value::Unit`] token.
pub trait NativeReturn: Sized {
    /// Kind of the return position.
    const RETURN_KIND: Kind;

    /// Box `self` into a generic value.
    fn into_return_value(self) -> Value;
}

impl<T: NativeValue> NativeReturn for T {
    const RETURN_KIND: Kind = <T as NativeValue>::KIND;

    #[inline]
    fn into_return_value(self) -> Value {
        self.into_value()
    }
}

impl NativeReturn for () {
    const RETURN_KIND: Kind = <() as NativeKind>::KIND;

    #[inline]
    fn into_return_value(self) -> Value {
        Value::Unit
    }
}

/// The `IntoResult` trait turns a return value into a
/// `Result<T, Self::Error>`.
///
/// It lets the body of a specialized function return either `T` or a
/// `Result<T, E>`.
pub trait IntoResult<T>
where
    T: NativeReturn,
{
    /// The error type for this trait.
    type Error: Error + Sync + Send + 'static;

    /// Transforms `Self` into a `Result`.
    fn into_result(self) -> Result<T, Self::Error>;
}

impl<T> IntoResult<T> for T
where
    T: NativeReturn,
{
    // `T` is not a `Result`, it's already a value, so no error
    // can be built.
    type Error = Infallible;

    fn into_result(self) -> Result<Self, Infallible> {
        Ok(self)
    }
}

impl<T, E> IntoResult<T> for Result<T, E>
where
    T: NativeReturn,
    E: Error + Sync + Send + 'static,
{
    type Error = E;

    fn into_result(self) -> Self {
        self
    }
}

/// The `NativeTypeList` trait represents a tuple (list) of parameter types of
/// a specialized function.
pub trait NativeTypeList: Sized {
    /// Number of parameters.
    const ARITY: usize;

    /// Get the kinds for the tuple (list) of parameter types.
    fn kinds() -> &'static [Kind];
}

macro_rules! impl_native_type_list {
    ( $( $x:ident ),+ ) => {
        impl< $( $x ),+ > NativeTypeList for ( $( $x, )+ )
        where
            $( $x: NativeValue ),+
        {
            const ARITY: usize = [ $( stringify!($x) ),+ ].len();

            fn kinds() -> &'static [Kind] {
                &[ $( $x::KIND ),+ ]
            }
        }
    };
}

impl_native_type_list!(A1);
impl_native_type_list!(A1, A2);
impl_native_type_list!(A1, A2, A3);
impl_native_type_list!(A1, A2, A3, A4);
impl_native_type_list!(A1, A2, A3, A4, A5);
impl_native_type_list!(A1, A2, A3, A4, A5, A6);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16);
impl_native_type_list!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17);
impl_native_type_list!(
    A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17, A18
);
impl_native_type_list!(
    A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17, A18, A19
);
impl_native_type_list!(
    A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17, A18, A19, A20
);
impl_native_type_list!(
    A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17, A18, A19, A20,
    A21
);
impl_native_type_list!(
    A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17, A18, A19, A20,
    A21, A22
);
