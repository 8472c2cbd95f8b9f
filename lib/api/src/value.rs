use std::convert::TryFrom;
use std::fmt;
use std::sync::Arc;

use fnbridge_types::{Kind, KindMismatch};

use crate::function::Function1;
use crate::native::NativeValue;
use crate::reference::AnyRef;

/// A shared handle to a single-argument function contract, as carried by
/// [`Value::Func`].
pub type FuncRef = Arc<dyn Function1>;

/// The uniform representation every value takes when it crosses a generic
/// call site:
/// * Primitives (32 or 64 bit integers, 32 or 64 bit floats, booleans), boxed
/// * The `Unit` token returned by functions that produce no value
/// * Erased references: opaque data, function values and tuples
#[derive(Clone)]
pub enum Value {
    /// A boxed 32-bit integer.
    I32(i32),

    /// A boxed 64-bit integer.
    I64(i64),

    /// A boxed 32-bit float.
    F32(f32),

    /// A boxed 64-bit float.
    F64(f64),

    /// A boxed boolean.
    Bool(bool),

    /// The "no value" token. Void functions called through the generic path
    /// always return this, never an absent value.
    Unit,

    /// An opaque reference to host data.
    Ref(AnyRef),

    /// A first-class reference to a single-argument function.
    Func(FuncRef),

    /// An ordered tuple of values.
    Tuple(Arc<[Value]>),
}

macro_rules! accessors {
    ($bind:ident $(($variant:ident($ty:ty) $get:ident $cvt:expr))*) => ($(
        /// Attempt to access the underlying value of this `Value`, returning
        /// `None` if it is not the correct kind.
        pub fn $get(&self) -> Option<$ty> {
            if let Self::$variant($bind) = self {
                Some($cvt)
            } else {
                None
            }
        }
    )*)
}

impl Value {
    /// Builds a `Value::Tuple` from its items.
    pub fn tuple<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Tuple(items.into_iter().collect())
    }

    /// Returns the runtime [`Kind`] of this `Value`.
    ///
    /// References, functions and tuples are all `Erased`: nothing can be
    /// unboxed out of them.
    pub fn kind(&self) -> Kind {
        match self {
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::Bool(_) => Kind::Bool,
            Self::Unit => Kind::Void,
            Self::Ref(_) | Self::Func(_) | Self::Tuple(_) => Kind::Erased,
        }
    }

    /// Returns true if this is the `Unit` token.
    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    accessors! {
        e
        (I32(i32) i32 *e)
        (I64(i64) i64 *e)
        (F32(f32) f32 *e)
        (F64(f64) f64 *e)
        (Bool(bool) bool *e)
        (Ref(&AnyRef) any_ref e)
        (Func(&FuncRef) func e)
        (Tuple(&[Value]) tuple_items &e[..])
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "I32({v:?})"),
            Self::I64(v) => write!(f, "I64({v:?})"),
            Self::F32(v) => write!(f, "F32({v:?})"),
            Self::F64(v) => write!(f, "F64({v:?})"),
            Self::Bool(v) => write!(f, "Bool({v:?})"),
            Self::Unit => write!(f, "Unit"),
            Self::Ref(v) => write!(f, "Ref({v:?})"),
            Self::Func(v) => write!(f, "Func({})", v.ty()),
            Self::Tuple(items) => f.debug_tuple("Tuple").field(&&items[..]).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Unit => write!(f, "()"),
            Self::Ref(_) => write!(f, "ref"),
            Self::Func(func) => write!(f, "func {}", func.ty()),
            Self::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Representational equality: floats compare by bit pattern (so a boxed NaN
/// equals itself), references and functions by identity.
impl PartialEq for Value {
    fn eq(&self, o: &Self) -> bool {
        match (self, o) {
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a.to_bits() == b.to_bits(),
            (Self::F64(a), Self::F64(b)) => a.to_bits() == b.to_bits(),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Unit, Self::Unit) => true,
            (Self::Ref(a), Self::Ref(b)) => a.ptr_eq(b),
            (Self::Func(a), Self::Func(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            (Self::Tuple(a), Self::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Self::I32(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Self::I64(val)
    }
}

impl From<f32> for Value {
    fn from(val: f32) -> Self {
        Self::F32(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Self::F64(val)
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Bool(val)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Unit
    }
}

impl From<AnyRef> for Value {
    fn from(val: AnyRef) -> Self {
        Self::Ref(val)
    }
}

impl From<FuncRef> for Value {
    fn from(val: FuncRef) -> Self {
        Self::Func(val)
    }
}

macro_rules! try_from_value {
    ( $( $ty:ty ),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = KindMismatch;

                #[inline]
                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    <$ty as NativeValue>::from_value(value)
                }
            }
        )*
    };
}

try_from_value!(i32, i64, f32, f64, bool);
