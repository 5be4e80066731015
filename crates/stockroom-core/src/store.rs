//! The [`RecordStore`] trait and the filter type backends accept.
//!
//! The trait is implemented by storage backends (e.g.
//! `stockroom-store-sqlite`). The provider depends on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  contract,
  fields::{FieldValue, Fields},
  record::Record,
};

// ─── Filter ──────────────────────────────────────────────────────────────────

/// A SQL `WHERE` fragment plus its positional parameters.
///
/// The clause uses bare `?` placeholders; parameters bind in order. This
/// mirrors the selection/args split of the original data-access surface.
#[derive(Debug, Clone, Default)]
pub struct Filter {
  pub clause: String,
  pub params: Vec<FieldValue>,
}

impl Filter {
  pub fn new(clause: impl Into<String>, params: Vec<FieldValue>) -> Self {
    Self { clause: clause.into(), params }
  }

  /// A filter selecting exactly one row by id.
  pub fn by_id(id: i64) -> Self {
    Self {
      clause: format!("{} = ?", contract::COLUMN_ID),
      params: vec![FieldValue::Integer(id)],
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the inventory storage backend.
///
/// Operations are plain single-table CRUD. Identifier routing, write
/// validation, and change notification all live a layer up in the
/// provider.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read full rows, optionally filtered and ordered.
  fn select(
    &self,
    filter: Option<Filter>,
    order: Option<String>,
  ) -> impl Future<Output = Result<Vec<Record>, Self::Error>> + Send + '_;

  /// Insert one row; returns the store-assigned id.
  fn insert(
    &self,
    fields: Fields,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Update rows matching `filter` (all rows when `None`); returns the
  /// affected count. An empty field set affects nothing.
  fn update(
    &self,
    fields: Fields,
    filter: Option<Filter>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Delete rows matching `filter` (all rows when `None`); returns the
  /// affected count.
  fn delete(
    &self,
    filter: Option<Filter>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
