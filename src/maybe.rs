//! # Maybe
//!
//! A value that may be absent, without relying on sentinel values.
//!
//! `Maybe<T>` has exactly two states:
//! - `Some(value)` holds one value of type `T`
//! - `None` holds nothing
//!
//! The variant is the only source of truth for presence. `Maybe::some(0)` is
//! not `Maybe::none()`, and `Maybe::default()` is the same value as
//! `Maybe::none()`.
//!
//! ## Example
//!
//! ```
//! use maybe::Maybe;
//!
//! let timeout = Maybe::some(30);
//! assert_eq!(timeout.map(|t| t * 2).unwrap_or(10), 60);
//!
//! let missing: Maybe<i32> = Maybe::none();
//! assert_eq!(missing.unwrap_or(10), 10);
//! ```

use crate::error::NoneError;

/// An optional value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A present value
    Some(T),
    /// No value
    None,
}

// No `T: Default` bound, unlike the derive.
impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> Maybe<T> {
    /// Creates an empty `Maybe`. Equivalent to [`Maybe::none`].
    pub const fn new() -> Self {
        Maybe::None
    }

    /// Wraps `value`, even when it is a zero or default value.
    pub const fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// Creates an empty `Maybe`.
    pub const fn none() -> Self {
        Maybe::None
    }

    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns the value, or [`NoneError`] when empty.
    pub fn unwrap(self) -> Result<T, NoneError> {
        self.unwrap_or_error(NoneError)
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics when empty. Only call this where presence has already been
    /// established.
    #[track_caller]
    pub fn unwrap_unsafe(self) -> T {
        match self.unwrap() {
            Ok(value) => value,
            Err(err) => panic!("called `Maybe::unwrap_unsafe()` on an empty value: {}", err),
        }
    }

    /// Returns the value, or `fallback` when empty.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback,
        }
    }

    /// Returns the value, or the result of `f` when empty.
    ///
    /// `f` runs at most once and never runs when a value is present.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => f(),
        }
    }

    /// Returns the value, or exactly `err` when empty.
    pub fn unwrap_or_error<E>(self, err: E) -> Result<T, E> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(err),
        }
    }

    /// Same as [`Maybe::unwrap_or`].
    pub fn or_else(self, else_value: T) -> T {
        self.unwrap_or(else_value)
    }

    /// Same as [`Maybe::unwrap_or_else`].
    pub fn or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.unwrap_or_else(f)
    }

    /// Same as [`Maybe::unwrap_or_error`].
    pub fn or_else_error<E>(self, err: E) -> Result<T, E> {
        self.unwrap_or_error(err)
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_equals_none() {
        assert_eq!(Maybe::<String>::new(), Maybe::none());
        assert_eq!(Maybe::<String>::default(), Maybe::none());
        assert!(Maybe::<String>::default().is_none());
    }

    #[test]
    fn some_with_zero_value_is_present() {
        let m = Maybe::some(0);
        assert!(m.is_some());
        assert!(!m.is_none());
        assert_ne!(m, Maybe::none());
        assert_eq!(m.unwrap(), Ok(0));
    }

    #[test]
    fn unwrap_none_reports_none_error() {
        let err = Maybe::<i32>::none().unwrap().unwrap_err();
        assert_eq!(err, NoneError);
        assert_eq!(err.to_string(), "none");
    }

    #[test]
    #[should_panic(expected = "unwrap_unsafe")]
    fn unwrap_unsafe_panics_on_none() {
        Maybe::<i32>::none().unwrap_unsafe();
    }

    #[test]
    fn unwrap_unsafe_returns_value() {
        assert_eq!(Maybe::some(42).unwrap_unsafe(), 42);
    }

    #[test]
    fn equality_compares_variant_then_value() {
        assert_eq!(Maybe::some("a"), Maybe::some("a"));
        assert_ne!(Maybe::some("a"), Maybe::some("b"));
        assert_eq!(Maybe::<&str>::none(), Maybe::none());
        assert_ne!(Maybe::some(""), Maybe::none());
    }

    #[test]
    fn option_conversions() {
        assert_eq!(Maybe::from(Some(3)), Maybe::some(3));
        assert_eq!(Maybe::<i32>::from(None), Maybe::none());
        assert_eq!(Maybe::some(3).into_option(), Some(3));
        assert_eq!(Option::<i32>::from(Maybe::none()), None);
    }

    #[test]
    fn as_mut_updates_in_place() {
        let mut m = Maybe::some(1);
        if let Maybe::Some(value) = m.as_mut() {
            *value += 1;
        }
        assert_eq!(m, Maybe::some(2));
    }

    #[test]
    fn iterates_zero_or_one_items() {
        assert_eq!(Maybe::some(7).into_iter().collect::<Vec<_>>(), vec![7]);
        assert_eq!(Maybe::<i32>::none().into_iter().count(), 0);
    }
}
