//! Tri-state field for partial updates.
//!
//! JSON update payloads need to tell "field omitted" apart from "field set to
//! null". `Option<T>` collapses both into `None`, so fields that support
//! clearing use [`Patch`] together with `#[serde(default)]`:
//!
//! ```
//! use propman_core::patch::Patch;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Update {
//!     #[serde(default)]
//!     note: Patch<String>,
//! }
//!
//! let omitted: Update = serde_json::from_str("{}").unwrap();
//! let cleared: Update = serde_json::from_str(r#"{"note": null}"#).unwrap();
//! assert_eq!(omitted.note, Patch::Missing);
//! assert_eq!(cleared.note, Patch::Null);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was not present in the payload.
    Missing,
    /// The field was present with an explicit `null`.
    Null,
    /// The field was present with a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absent keys hit `Default`.
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

/// `Value(v)` serializes as `v`; `Missing` and `Null` both serialize as null.
impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(v) => serializer.serialize_some(v),
            Patch::Missing | Patch::Null => serializer.serialize_none(),
        }
    }
}
