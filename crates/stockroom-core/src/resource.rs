//! Resource identifiers — the URI shapes the provider routes on.
//!
//! Only two shapes exist: the whole collection and a single record by id.
//! Everything else is rejected at parse time, before any routing or
//! storage work happens.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{contract, Error, Result};

/// An addressable resource: the full collection or one record by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceUri {
  /// `stockroom://inventory/records`
  Collection,
  /// `stockroom://inventory/records/<id>`
  Item(i64),
}

impl ResourceUri {
  /// Parse an identifier string into one of the two known shapes.
  pub fn parse(uri: &str) -> Result<Self> {
    let rest = uri
      .strip_prefix(contract::SCHEME)
      .and_then(|r| r.strip_prefix("://"))
      .and_then(|r| r.strip_prefix(contract::AUTHORITY))
      .and_then(|r| r.strip_prefix('/'))
      .ok_or_else(|| Error::UnrecognizedResource(uri.to_owned()))?;

    if rest == contract::PATH_RECORDS {
      return Ok(Self::Collection);
    }

    let id = rest
      .strip_prefix(contract::PATH_RECORDS)
      .and_then(|r| r.strip_prefix('/'))
      .and_then(|r| r.parse::<i64>().ok())
      .ok_or_else(|| Error::UnrecognizedResource(uri.to_owned()))?;

    Ok(Self::Item(id))
  }

  /// The descriptive type string for this shape.
  pub fn content_type(self) -> &'static str {
    match self {
      Self::Collection => contract::CONTENT_LIST_TYPE,
      Self::Item(_) => contract::CONTENT_ITEM_TYPE,
    }
  }

  pub fn is_collection(self) -> bool { matches!(self, Self::Collection) }
}

impl fmt::Display for ResourceUri {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Collection => f.write_str(contract::COLLECTION_URI),
      Self::Item(id) => write!(f, "{}/{id}", contract::COLLECTION_URI),
    }
  }
}

impl FromStr for ResourceUri {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}
