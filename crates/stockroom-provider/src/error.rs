//! Error type for the provider.
//!
//! Validation failures are raised before any storage access. Storage
//! failures are wrapped backend-agnostically so the provider stays
//! generic over [`RecordStore`](stockroom_core::store::RecordStore)
//! implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The identifier is not one of the two known shapes.
  #[error(transparent)]
  Resource(#[from] stockroom_core::Error),

  /// The identifier shape is known but the operation does not apply to it.
  #[error("{op} is not supported for {uri}")]
  Unsupported { op: &'static str, uri: String },

  #[error("record requires a name")]
  MissingName,

  #[error("record requires a non-negative price")]
  InvalidPrice,

  #[error("record requires a supplier phone")]
  MissingSupplierPhone,

  /// An update tried to null out a required field.
  #[error("record requires a non-null {0}")]
  NullField(&'static str),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// True for the field-level variants a UI should surface verbatim.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      Self::MissingName
        | Self::InvalidPrice
        | Self::MissingSupplierPhone
        | Self::NullField(_)
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
