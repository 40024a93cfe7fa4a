// src/models/record.rs

//! Flat, string-valued athlete record.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from snake_case field name to string value.
///
/// Values stay strings so formatting such as `"49%"`, `"0:00"` or leading
/// zeros survives export untouched. Insertion order is kept and becomes the
/// export column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    fields: Vec<(String, String)>,
}

impl FlatRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a fixed `(key, value)` table.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.insert(*key, *value);
        }
        record
    }

    /// Insert a field. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the record holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Merge another record into this one, field by field.
    pub fn extend(&mut self, other: FlatRecord) {
        for (key, value) in other.fields {
            self.insert(key, value);
        }
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Outcome of a single section extraction.
///
/// `Fallback` carries the section's fixed default value and marks that the
/// section was absent or malformed in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    Found(T),
    Fallback(T),
}

impl<T> Extraction<T> {
    /// Unwrap the value regardless of which branch produced it.
    pub fn into_inner(self) -> T {
        match self {
            Extraction::Found(value) | Extraction::Fallback(value) => value,
        }
    }

    pub fn as_ref(&self) -> &T {
        match self {
            Extraction::Found(value) | Extraction::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback(_))
    }
}
