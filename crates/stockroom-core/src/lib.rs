//! Core types for the Stockroom inventory data layer.
//!
//! This crate is deliberately free of database dependencies. All other
//! crates depend on it; it depends on nothing heavier than `serde`.

pub mod contract;
pub mod error;
pub mod fields;
pub mod record;
pub mod resource;
pub mod store;

pub use error::{Error, Result};
