use thiserror::Error;

/// Returned by [`Maybe::unwrap`](crate::Maybe::unwrap) when there is no value.
///
/// The message is always `"none"`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("none")]
pub struct NoneError;
