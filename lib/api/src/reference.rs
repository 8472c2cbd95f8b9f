use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An opaque reference to some host data. This reference can be passed
/// through any generic call site without being unboxed.
#[derive(Clone)]
#[repr(transparent)]
pub struct AnyRef {
    inner: Arc<dyn Any + Send + Sync>,
}

impl AnyRef {
    /// Make a new reference holding `value`.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync + 'static + Sized,
    {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Try to downcast to the given value.
    pub fn downcast<T>(&self) -> Option<&T>
    where
        T: Any + Send + Sync + 'static + Sized,
    {
        self.inner.downcast_ref::<T>()
    }

    /// Checks whether the referenced data is of type `T`.
    pub fn is<T>(&self) -> bool
    where
        T: Any + Send + Sync + 'static + Sized,
    {
        self.inner.is::<T>()
    }

    /// Returns true if both handles point at the same data.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl fmt::Debug for AnyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnyRef({:p})", Arc::as_ptr(&self.inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn downcast_to_payload() {
        let r = AnyRef::new(PathBuf::from("src/lib.rs"));
        assert!(r.is::<PathBuf>());
        assert_eq!(
            r.downcast::<PathBuf>().map(|p| p.to_string_lossy().into_owned()),
            Some("src/lib.rs".to_string())
        );
        assert!(r.downcast::<String>().is_none());
    }

    #[test]
    fn clones_share_identity() {
        let r = AnyRef::new(7u8);
        let c = r.clone();
        assert!(r.ptr_eq(&c));
        assert!(!r.ptr_eq(&AnyRef::new(7u8)));
    }
}
