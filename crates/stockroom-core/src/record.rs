//! The record type — one inventory entry.

use serde::{Deserialize, Serialize};

/// One inventory entry as persisted in the records table.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// The quantity range (0..=500) is a presentation-layer rule; values
/// outside it round-trip through storage untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  pub id:             i64,
  pub name:           String,
  pub price:          i64,
  pub quantity:       i64,
  pub supplier_name:  String,
  pub supplier_phone: String,
}
