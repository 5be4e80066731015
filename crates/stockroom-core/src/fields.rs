//! Field sets — the write-side payload for inserts and partial updates.
//!
//! A field set maps column names to scalar values. A key may be present
//! with [`FieldValue::Null`]; that is a different state from the key being
//! absent, and write validation in the provider depends on the
//! distinction: absent keys are left untouched, present-but-null keys are
//! rejected for required columns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ─── Values ──────────────────────────────────────────────────────────────────

/// One scalar cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
  Null,
  Integer(i64),
  Text(String),
}

impl FieldValue {
  /// The text content, if this is a non-null text value.
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(t) => Some(t),
      _ => None,
    }
  }

  /// The integer content, if this is a non-null integer value.
  pub fn as_integer(&self) -> Option<i64> {
    match self {
      Self::Integer(i) => Some(*i),
      _ => None,
    }
  }

  pub fn is_null(&self) -> bool { matches!(self, Self::Null) }
}

// ─── Field set ───────────────────────────────────────────────────────────────

/// An ordered set of column/value pairs for a single write request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
  pub fn new() -> Self { Self::default() }

  /// Set `column` to a text value.
  pub fn text(mut self, column: &str, value: impl Into<String>) -> Self {
    self.0.insert(column.to_owned(), FieldValue::Text(value.into()));
    self
  }

  /// Set `column` to an integer value.
  pub fn integer(mut self, column: &str, value: i64) -> Self {
    self.0.insert(column.to_owned(), FieldValue::Integer(value));
    self
  }

  /// Set `column` to an explicit null.
  pub fn null(mut self, column: &str) -> Self {
    self.0.insert(column.to_owned(), FieldValue::Null);
    self
  }

  pub fn get(&self, column: &str) -> Option<&FieldValue> { self.0.get(column) }

  pub fn contains(&self, column: &str) -> bool { self.0.contains_key(column) }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// Iterate over `(column, value)` pairs in column-name order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v))
  }
}
