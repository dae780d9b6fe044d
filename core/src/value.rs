//! value.rs
//! Type-erased values whose concrete type is only known at runtime.
//!
//! Event bodies, header values and snapshot payloads are all `DynValue`s.
//! The envelope codec recovers the concrete type through the contract name,
//! never from the content.

use std::any::{Any, TypeId};
use std::fmt;

use crate::utils::short_type_name;

/// A boxed value that remembers its dynamic type.
pub struct DynValue {
    inner: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl DynValue {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            inner: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// `TypeId` of the boxed value, not of the box.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Unbox into `T`, handing the value back untouched on mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        match self.inner.downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(inner) => Err(Self { inner, type_name }),
        }
    }

    #[inline]
    pub fn as_any(&self) -> &(dyn Any + Send + Sync) {
        self.inner.as_ref()
    }
}

impl fmt::Debug for DynValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynValue")
            .field("type", &short_type_name(self.type_name))
            .finish_non_exhaustive()
    }
}
