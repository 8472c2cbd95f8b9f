use std::fmt;

#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

use crate::MAX_ARITY;
use crate::error::SignatureError;

// Kind Representations

/// A list of all the kinds a function position can be specialized for.
///
/// Every value crossing a generic call site is represented uniformly; a kind
/// other than `Erased` means the position is unboxed to a native value before
/// the specialized body runs.
#[derive(Copy, Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Kind {
    /// Signed 32 bit integer.
    I32,
    /// Signed 64 bit integer.
    I64,
    /// 32 bit floating point number.
    F32,
    /// 64 bit floating point number.
    F64,
    /// A boolean.
    Bool,
    /// No value. Only valid as a return kind.
    Void,
    /// Any generic value, passed through without conversion.
    Erased,
}

impl Kind {
    /// Returns true if the kind is one of the unboxable primitive kinds
    /// (`I32`, `I64`, `F32`, `F64`, `Bool`).
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::I32 | Self::I64 | Self::F32 | Self::F64 | Self::Bool
        )
    }

    /// Returns true if the kind is `Void`.
    pub fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns true if the kind is `Erased`.
    pub fn is_erased(self) -> bool {
        matches!(self, Self::Erased)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The signature of a function value: one kind per parameter and a result
/// kind.
///
/// A signature with only `Erased` positions describes the plain generic
/// contract of its arity; any other signature describes exactly one
/// specialized variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct FunctionType {
    /// The parameters of the function
    params: Box<[Kind]>,
    /// The result of the function
    result: Kind,
}

impl FunctionType {
    /// Creates a new Function Type with the given parameter and result kinds.
    ///
    /// The signature is not validated; see [`FunctionType::validate`].
    pub fn new<Params>(params: Params, result: Kind) -> Self
    where
        Params: Into<Box<[Kind]>>,
    {
        Self {
            params: params.into(),
            result,
        }
    }

    /// The signature of the unspecialized contract of the given arity.
    pub fn erased(arity: usize) -> Self {
        Self::new(vec![Kind::Erased; arity], Kind::Erased)
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Parameter kinds.
    pub fn params(&self) -> &[Kind] {
        &self.params
    }

    /// Result kind.
    pub fn result(&self) -> Kind {
        self.result
    }

    /// Returns true if at least one position is bound to a kind other than
    /// `Erased`.
    pub fn is_specialized(&self) -> bool {
        !self.result.is_erased() || self.params.iter().any(|k| !k.is_erased())
    }

    /// Number of unboxing conversions a generic call performs: one per
    /// primitive parameter.
    pub fn unbox_count(&self) -> usize {
        self.params.iter().filter(|k| k.is_primitive()).count()
    }

    /// Number of boxing conversions a generic call performs: one for a
    /// primitive result, none for `Void` or `Erased`.
    pub fn box_count(&self) -> usize {
        usize::from(self.result.is_primitive())
    }

    /// Checks that the arity lies in `1..=MAX_ARITY` and that no parameter is
    /// `Void`.
    pub fn validate(&self) -> Result<(), SignatureError> {
        let arity = self.arity();
        if arity == 0 || arity > MAX_ARITY {
            return Err(SignatureError::ArityOutOfRange(arity));
        }
        if let Some(position) = self.params.iter().position(|k| k.is_void()) {
            return Err(SignatureError::VoidParameter(position));
        }
        Ok(())
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let params = self
            .params
            .iter()
            .map(|p| format!("{p:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{params}] -> {:?}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_classification() {
        for kind in [Kind::I32, Kind::I64, Kind::F32, Kind::F64, Kind::Bool] {
            assert!(kind.is_primitive(), "{kind} should be primitive");
        }
        assert!(!Kind::Void.is_primitive());
        assert!(!Kind::Erased.is_primitive());
        assert!(Kind::Void.is_void());
        assert!(Kind::Erased.is_erased());
    }

    #[test]
    fn display_signature() {
        let ty = FunctionType::new(vec![Kind::I32, Kind::F64], Kind::Bool);
        assert_eq!(ty.to_string(), "[I32, F64] -> Bool");
        assert_eq!(FunctionType::erased(1).to_string(), "[Erased] -> Erased");
    }

    #[test]
    fn conversion_counts() {
        let ty = FunctionType::new(vec![Kind::I64, Kind::Erased, Kind::F32], Kind::Void);
        assert_eq!(ty.unbox_count(), 2);
        assert_eq!(ty.box_count(), 0);
        assert!(ty.is_specialized());

        let ty = FunctionType::new(vec![Kind::Erased], Kind::I32);
        assert_eq!(ty.unbox_count(), 0);
        assert_eq!(ty.box_count(), 1);

        let erased = FunctionType::erased(3);
        assert!(!erased.is_specialized());
        assert_eq!(erased.unbox_count() + erased.box_count(), 0);
    }

    #[test]
    fn validate_arity_range() {
        assert_eq!(
            FunctionType::erased(0).validate(),
            Err(SignatureError::ArityOutOfRange(0))
        );
        assert_eq!(FunctionType::erased(1).validate(), Ok(()));
        assert_eq!(FunctionType::erased(MAX_ARITY).validate(), Ok(()));
        assert_eq!(
            FunctionType::erased(MAX_ARITY + 1).validate(),
            Err(SignatureError::ArityOutOfRange(MAX_ARITY + 1))
        );
    }

    #[test]
    fn validate_rejects_void_parameter() {
        let ty = FunctionType::new(vec![Kind::I32, Kind::Void], Kind::Void);
        assert_eq!(ty.validate(), Err(SignatureError::VoidParameter(1)));
    }

    #[cfg(feature = "enable-serde")]
    #[test]
    fn serde_signature() {
        let ty = FunctionType::new(vec![Kind::Bool, Kind::I64], Kind::F32);
        let json = serde_json::to_string(&ty).unwrap();
        let back: FunctionType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty);
    }
}
