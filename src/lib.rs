//! A type-safe optional value with combinators, nullable-reference interop and
//! a serde codec that tells an omitted field from a `null` one.

pub mod error;
pub mod maybe;
pub mod combinators;
pub mod pointer;
#[cfg(feature = "serde")]
pub mod codec;


pub use error::NoneError;
pub use maybe::Maybe;
pub use pointer::{from_interface, from_ptr, from_ptr_dereferenced, MaybeNil, Nil};
#[cfg(feature = "serde")]
pub use codec::{field_presence, FieldPresence};
