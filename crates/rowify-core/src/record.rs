//! Ordered, arbitrarily nested key/value records.
//!
//! A [`Record`] is one row of input data: an insertion-ordered mapping from
//! field name to either a scalar display string or a nested record. Records
//! in a sequence may differ in which keys they carry and how deeply a given
//! key nests; the renderer merges their shapes and treats absent keys as
//! blank cells, so "absent" and "present but empty" stay distinct.
//!
//! # Examples
//!
//! ```
//! use rowify_core::{Record, Value};
//!
//! let row = Record::new()
//!     .with("name", "IFT 101")
//!     .with("grades", Record::new().with("midterm", 34.5).with("final", 51));
//!
//! assert_eq!(row.len(), 2);
//! assert_eq!(row.get("name").and_then(Value::as_scalar), Some("IFT 101"));
//! assert!(row.get("missing").is_none());
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A field value: either a scalar display string or a nested record.
///
/// Scalars are stringified on construction; the renderer never interprets
/// them (numbers, percentages and dates are opaque text to it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A nested record, rendered as a labeled group of sub-columns.
    Nested(Record),
    /// A scalar cell value.
    Scalar(String),
}

impl Value {
    /// Creates a scalar value from anything displayable.
    pub fn scalar(value: impl fmt::Display) -> Self {
        Self::Scalar(value.to_string())
    }

    /// Returns the scalar text, or `None` for nested records.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            Self::Nested(_) => None,
        }
    }

    /// Returns the nested record, or `None` for scalars.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Nested(record) => Some(record),
            Self::Scalar(_) => None,
        }
    }

    /// Returns true if this value is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns true if this value is a nested record.
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Nested(record)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Scalar(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Scalar(text.to_string())
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::Scalar(value.to_string())
            }
        })*
    };
}

impl_scalar_from!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, char);

/// One row of input data: an insertion-ordered mapping from field name to
/// [`Value`]. Iteration order is first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, keeping the original position if the key already
    /// exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value at `name`, or `None` when the field is absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
