//! This module maps native Rust types onto the kind model.

use crate::types::Kind;

/// `NativeKind` represents a kind that has a direct representation on the
/// host (hence the “native” term).
///
/// It uses the Rust Type system to automatically detect the kind associated
/// with a native Rust type.
///
/// ```
/// use fnbridge_types::{Kind, NativeKind};
///
/// let kind = i32::KIND;
/// assert_eq!(kind, Kind::I32);
/// ```
///
/// > Note: this is what lets a specialized function derive its signature
/// > from the types of its closure.
pub trait NativeKind: Sized {
    /// Kind for this `NativeKind`.
    const KIND: Kind;
}

impl NativeKind for i32 {
    const KIND: Kind = Kind::I32;
}

impl NativeKind for i64 {
    const KIND: Kind = Kind::I64;
}

impl NativeKind for f32 {
    const KIND: Kind = Kind::F32;
}

impl NativeKind for f64 {
    const KIND: Kind = Kind::F64;
}

impl NativeKind for bool {
    const KIND: Kind = Kind::Bool;
}

impl NativeKind for () {
    const KIND: Kind = Kind::Void;
}
