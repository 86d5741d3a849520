//! Interop with nullable references.
//!
//! Code that does not use [`Maybe`] represents optionality with
//! `Option<&T>`, `Option<Box<T>>` or raw pointers. These helpers convert
//! between the two worlds.
//!
//! Dynamically typed values are the tricky case: a non-null handle such as
//! `Box<dyn Any>` can still wrap a null payload. [`from_interface`] asks the
//! value itself through [`MaybeNil`] instead of only checking the handle.

use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

use crate::maybe::Maybe;

/// Copies the referenced value. Later changes to the original do not reach
/// the returned `Maybe`.
pub fn from_ptr_dereferenced<T: Clone>(ptr: Option<&T>) -> Maybe<T> {
    match ptr {
        Some(value) => Maybe::Some(value.clone()),
        None => Maybe::None,
    }
}

/// Keeps the reference itself, preserving identity.
pub fn from_ptr<T: ?Sized>(ptr: Option<&T>) -> Maybe<&T> {
    ptr.into()
}

/// Returns `None` if `value` is nil according to [`MaybeNil`], otherwise
/// `Some(value)` unchanged.
pub fn from_interface<T: MaybeNil>(value: T) -> Maybe<T> {
    if value.is_nil() {
        Maybe::None
    } else {
        Maybe::Some(value)
    }
}

impl<T: Clone> Maybe<T> {
    /// Returns a fresh heap copy of the value, or `None`.
    pub fn to_ptr(&self) -> Option<Box<T>> {
        match self {
            Maybe::Some(value) => Some(Box::new(value.clone())),
            Maybe::None => None,
        }
    }
}

/// Payload marking a dynamic handle that points at nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nil;

/// Values that can report whether they are effectively null.
pub trait MaybeNil {
    fn is_nil(&self) -> bool;
}

macro_rules! never_nil {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MaybeNil for $ty {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl MaybeNil for Nil {
    fn is_nil(&self) -> bool {
        true
    }
}

impl<T: MaybeNil> MaybeNil for Option<T> {
    fn is_nil(&self) -> bool {
        match self {
            Some(value) => value.is_nil(),
            None => true,
        }
    }
}

impl<T: MaybeNil> MaybeNil for Maybe<T> {
    fn is_nil(&self) -> bool {
        match self {
            Maybe::Some(value) => value.is_nil(),
            Maybe::None => true,
        }
    }
}

impl<T: ?Sized> MaybeNil for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> MaybeNil for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: MaybeNil + ?Sized> MaybeNil for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: MaybeNil + ?Sized> MaybeNil for Box<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: MaybeNil + ?Sized> MaybeNil for Rc<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: MaybeNil + ?Sized> MaybeNil for Arc<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl MaybeNil for dyn Any {
    fn is_nil(&self) -> bool {
        self.is::<Nil>()
    }
}

impl MaybeNil for dyn Any + Send {
    fn is_nil(&self) -> bool {
        self.is::<Nil>()
    }
}

impl MaybeNil for dyn Any + Send + Sync {
    fn is_nil(&self) -> bool {
        self.is::<Nil>()
    }
}

#[cfg(feature = "serde")]
impl MaybeNil for serde_json::Value {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}
