//! Immutable key/value metadata attached to an [`Error`](crate::types::Error).
//!
//! [`Metadata`] is a cheaply clonable, shared map. All "modifying" methods take
//! `self` and hand back a new map; a map that has already been attached to an
//! error is never changed behind the error's back.
//!
//! # Examples
//!
//! ```
//! use error_or::{Metadata, MetadataValue};
//!
//! let base = Metadata::new().with("user_id", 42);
//! let extended = base.clone().with("retry", true);
//!
//! assert_eq!(base.len(), 1);
//! assert_eq!(extended.len(), 2);
//! assert_eq!(extended.get("retry"), Some(&MetadataValue::Bool(true)));
//! ```
use crate::types::alloc_type::{Arc, BTreeMap, String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single metadata value.
///
/// Covers the shapes that show up in structured logs and API payloads. With the
/// `serde` feature the enum is untagged, so it maps one-to-one onto JSON.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<MetadataValue>),
    Map(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    /// Returns the text payload, if any.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the value as a signed integer when it fits.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(value) => Some(value),
            Self::UInt(value) => i64::try_from(value).ok(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// Values that fit in `i64` are stored as `Int`, matching what deserialization produces.
impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::Int(value),
            Err(_) => Self::UInt(value),
        }
    }
}

impl From<usize> for MetadataValue {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<V: Into<MetadataValue>> From<Vec<V>> for MetadataValue {
    fn from(values: Vec<V>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Shared, immutable map from string keys to [`MetadataValue`]s.
///
/// Cloning is a reference-count bump. [`Metadata::with`] copies the underlying
/// map only when it is shared, so handing the same `Metadata` to many errors
/// costs one allocation in total.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    entries: Arc<BTreeMap<String, MetadataValue>>,
}

impl Metadata {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a map with `key` set to `value`, replacing any previous entry.
    ///
    /// Other clones of `self` keep seeing the old contents.
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        Arc::make_mut(&mut self.entries).insert(key.into(), value.into());
        self
    }

    /// Returns a map without `key`.
    #[must_use]
    pub fn without(mut self, key: &str) -> Self {
        if self.entries.contains_key(key) {
            Arc::make_mut(&mut self.entries).remove(key);
        }
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in key order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns `true` when both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { entries: Arc::new(entries) }
    }
}

impl From<BTreeMap<String, MetadataValue>> for Metadata {
    #[inline]
    fn from(entries: BTreeMap<String, MetadataValue>) -> Self {
        Self { entries: Arc::new(entries) }
    }
}
