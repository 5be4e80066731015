//! Error types for `stockroom-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The identifier is neither the collection nor a single-item shape.
  #[error("unrecognized resource: {0}")]
  UnrecognizedResource(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
