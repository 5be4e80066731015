//! [`RecordProvider`] — identifier routing, write validation, and change
//! notification over any [`RecordStore`] backend.

use std::sync::Arc;

use stockroom_core::{
  contract,
  fields::Fields,
  record::Record,
  resource::ResourceUri,
  store::{Filter, RecordStore},
};

use crate::{
  Error, Result,
  notify::{ChangeFeed, ChangeHub},
};

// ─── Provider ────────────────────────────────────────────────────────────────

/// The data mediator between presentation and storage.
///
/// All reads and writes go through here. The store handle is passed in at
/// construction; the provider holds no global state.
pub struct RecordProvider<S> {
  store:   Arc<S>,
  changes: ChangeHub,
}

impl<S: RecordStore> RecordProvider<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store, changes: ChangeHub::new() }
  }

  /// Subscribe to change notifications. Each successful write delivers the
  /// identifier it changed; re-query to see the new state.
  pub fn subscribe(&self) -> ChangeFeed { self.changes.subscribe() }

  /// The descriptive type string for an identifier.
  pub fn type_of(&self, uri: &str) -> Result<&'static str> {
    Ok(ResourceUri::parse(uri)?.content_type())
  }

  /// Read rows at `uri`. An item identifier pins the filter to that id,
  /// ignoring whatever the caller supplied.
  pub async fn query(
    &self,
    uri: &str,
    filter: Option<Filter>,
    order: Option<String>,
  ) -> Result<Vec<Record>> {
    let filter = match ResourceUri::parse(uri)? {
      ResourceUri::Collection => filter,
      ResourceUri::Item(id) => Some(Filter::by_id(id)),
    };

    self
      .store
      .select(filter, order)
      .await
      .map_err(|e| Error::Store(Box::new(e)))
  }

  /// Insert a new record at the collection identifier; returns the item
  /// identifier of the new row.
  pub async fn insert(&self, uri: &str, fields: Fields) -> Result<ResourceUri> {
    if let item @ ResourceUri::Item(_) = ResourceUri::parse(uri)? {
      return Err(Error::Unsupported { op: "insert", uri: item.to_string() });
    }

    validate_insert(&fields)?;

    let id = match self.store.insert(fields).await {
      Ok(id) => id,
      Err(e) => {
        tracing::error!(uri, error = %e, "failed to insert record");
        return Err(Error::Store(Box::new(e)));
      }
    };

    self.changes.notify(ResourceUri::Collection);
    Ok(ResourceUri::Item(id))
  }

  /// Update rows at `uri` with a partial field set; returns the affected
  /// count. An item identifier pins the filter to that id, ignoring the
  /// caller's filter.
  pub async fn update(
    &self,
    uri: &str,
    fields: Fields,
    filter: Option<Filter>,
  ) -> Result<usize> {
    let target = ResourceUri::parse(uri)?;
    let filter = match target {
      ResourceUri::Collection => filter,
      ResourceUri::Item(id) => Some(Filter::by_id(id)),
    };

    validate_update(&fields)?;

    if fields.is_empty() {
      return Ok(0);
    }

    let count = self
      .store
      .update(fields, filter)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    if count > 0 {
      self.changes.notify(target);
    }
    Ok(count)
  }

  /// Delete rows at `uri`; returns the affected count. A collection
  /// identifier with no filter wipes the table; an item identifier pins
  /// the filter to that id.
  pub async fn delete(&self, uri: &str, filter: Option<Filter>) -> Result<usize> {
    let target = ResourceUri::parse(uri)?;
    let filter = match target {
      ResourceUri::Collection => filter,
      ResourceUri::Item(id) => Some(Filter::by_id(id)),
    };

    let count = self
      .store
      .delete(filter)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    if count > 0 {
      self.changes.notify(target);
    }
    Ok(count)
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Insert-time checks: name and supplier phone must arrive non-null, and a
/// price that does arrive must be a non-negative integer. supplier_name is
/// left to the NOT NULL column constraint at the store.
fn validate_insert(fields: &Fields) -> Result<()> {
  if fields
    .get(contract::COLUMN_NAME)
    .and_then(|v| v.as_text())
    .is_none()
  {
    return Err(Error::MissingName);
  }

  if let Some(price) = fields
    .get(contract::COLUMN_PRICE)
    .and_then(|v| v.as_integer())
    && price < 0
  {
    return Err(Error::InvalidPrice);
  }

  if fields
    .get(contract::COLUMN_SUPPLIER_PHONE)
    .and_then(|v| v.as_text())
    .is_none()
  {
    return Err(Error::MissingSupplierPhone);
  }

  Ok(())
}

fn require_text(fields: &Fields, column: &'static str) -> Result<()> {
  match fields.get(column) {
    Some(v) if v.as_text().is_none() => Err(Error::NullField(column)),
    _ => Ok(()),
  }
}

fn require_integer(fields: &Fields, column: &'static str) -> Result<()> {
  match fields.get(column) {
    Some(v) if v.as_integer().is_none() => Err(Error::NullField(column)),
    _ => Ok(()),
  }
}

/// Update-time checks: any key that is present must carry a usable value.
/// Absent keys leave the column untouched (partial update semantics). Note
/// that an out-of-range quantity passes — the 0..=500 window is enforced
/// by the presentation layer, not here.
fn validate_update(fields: &Fields) -> Result<()> {
  require_text(fields, contract::COLUMN_NAME)?;
  require_integer(fields, contract::COLUMN_PRICE)?;
  require_integer(fields, contract::COLUMN_QUANTITY)?;
  require_text(fields, contract::COLUMN_SUPPLIER_PHONE)?;
  Ok(())
}
