//! Transformations over [`Maybe`].
//!
//! Every combinator consumes its receiver and returns a new value. Closures
//! are only called when a value is present, so chains short-circuit at the
//! first `None`.

use crate::maybe::Maybe;

impl<T> Maybe<T> {
    /// Applies `f` to the value and wraps the result.
    pub fn map<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Applies `f` to the value and returns its result as is.
    pub fn flat_map<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(value) if predicate(&value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// Runs exactly one of the two branches.
    pub fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Maybe::Some(value) => on_some(value),
            Maybe::None => on_none(),
        }
    }
}

pub fn map<T, R>(m: Maybe<T>, f: impl FnOnce(T) -> R) -> Maybe<R> {
    m.map(f)
}

pub fn flat_map<T, R>(m: Maybe<T>, f: impl FnOnce(T) -> Maybe<R>) -> Maybe<R> {
    m.flat_map(f)
}

pub fn filter<T>(m: Maybe<T>, predicate: impl FnOnce(&T) -> bool) -> Maybe<T> {
    m.filter(predicate)
}

/// Free-function form of [`Maybe::match_with`].
pub fn fold<T, U>(m: Maybe<T>, on_some: impl FnOnce(T) -> U, on_none: impl FnOnce() -> U) -> U {
    m.match_with(on_some, on_none)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn map_skips_closure_on_none() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::none().map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        assert!(result.is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn filter_rejects_failing_predicate() {
        assert_eq!(Maybe::some(3).filter(|x| *x > 5), Maybe::none());
        assert_eq!(Maybe::some(10).filter(|x| *x > 5), Maybe::some(10));
    }

    #[test]
    fn match_with_runs_one_branch() {
        let some_calls = Cell::new(0);
        let none_calls = Cell::new(0);

        let out = Maybe::some(4).match_with(
            |x| {
                some_calls.set(some_calls.get() + 1);
                x + 1
            },
            || {
                none_calls.set(none_calls.get() + 1);
                0
            },
        );

        assert_eq!(out, 5);
        assert_eq!((some_calls.get(), none_calls.get()), (1, 0));
    }
}
