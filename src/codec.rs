//! # Codec
//!
//! Serde support for [`Maybe`] that keeps track of whether a field was
//! present.
//!
//! A field holding a `Maybe` is in one of three states on the wire:
//!
//! | State     | Wire                   | Decodes to               |
//! |-----------|------------------------|--------------------------|
//! | `Omitted` | key missing            | `Maybe::None`            |
//! | `Null`    | `"key": null`          | `Maybe::Some(null value)`|
//! | `Value`   | `"key": <value>`       | `Maybe::Some(value)`     |
//!
//! A key given as `null` is still a key that was given, so it is never folded
//! into `None`. The "null value" is the type's own null when it has one
//! (`Option<U>`, `serde_json::Value`, `()`), otherwise `T::default()`.
//!
//! Encoding writes `Some(value)` through `T`'s own `Serialize`. To omit the
//! key for `None`, tag the field:
//!
//! ```
//! use maybe::Maybe;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Config {
//!     name: String,
//!     #[serde(default, skip_serializing_if = "Maybe::is_none")]
//!     timeout: Maybe<i32>,
//! }
//!
//! let cfg: Config = serde_json::from_str(r#"{"name": "test"}"#).unwrap();
//! assert!(cfg.timeout.is_none());
//! assert_eq!(serde_json::to_string(&cfg).unwrap(), r#"{"name":"test"}"#);
//! ```
//!
//! Without `skip_serializing_if`, `None` encodes as `null`. Always pair it with
//! `default`: without it serde routes a missing key through the `null` path.

use serde::de::value::{Error as ValueError, UnitDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::maybe::Maybe;

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Maybe::Some(value) => value.serialize(serializer),
            Maybe::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<T>::deserialize(deserializer)? {
            Some(value) => Ok(Maybe::Some(value)),
            None => {
                log::trace!(
                    "decoding explicit null as present {}",
                    std::any::type_name::<T>()
                );
                Ok(Maybe::Some(null_value()))
            }
        }
    }
}

// Types with a native null (`Option`, `serde_json::Value`, `()`) accept a
// unit; everything else falls back to its default.
fn null_value<'de, T>() -> T
where
    T: Deserialize<'de> + Default,
{
    let unit: UnitDeserializer<ValueError> = ().into_deserializer();
    T::deserialize(unit).unwrap_or_default()
}

/// Wire state of one field in a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPresence {
    /// The key is missing
    Omitted,
    /// The key is present with `null`
    Null,
    /// The key is present with a concrete value
    Value,
}

impl FieldPresence {
    pub fn is_present(&self) -> bool {
        !matches!(self, FieldPresence::Omitted)
    }
}

/// Classifies `key` in `record`. Anything other than an object has no keys.
pub fn field_presence(record: &serde_json::Value, key: &str) -> FieldPresence {
    match record.as_object().and_then(|fields| fields.get(key)) {
        None => FieldPresence::Omitted,
        Some(serde_json::Value::Null) => FieldPresence::Null,
        Some(_) => FieldPresence::Value,
    }
}

/// Encodes `value` as compact JSON.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let out = serde_json::to_string(value)?;
    log::trace!("encoded {} ({} bytes)", std::any::type_name::<T>(), out.len());
    Ok(out)
}

/// Decodes `input`. Parser errors are returned untouched.
pub fn from_str<'a, T: Deserialize<'a>>(input: &'a str) -> Result<T, serde_json::Error> {
    log::trace!("decoding {} from {} bytes", std::any::type_name::<T>(), input.len());
    serde_json::from_str(input)
}
