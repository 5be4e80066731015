//! The Stockroom data mediator.
//!
//! [`RecordProvider`] routes resource identifiers to CRUD operations on a
//! [`RecordStore`](stockroom_core::store::RecordStore), validates write
//! payloads before any storage access, and broadcasts a change
//! notification after every successful write. Consumers re-query on
//! notification; nothing is pushed beyond the identifier that changed.

mod notify;
mod provider;

pub mod error;

pub use error::{Error, Result};
pub use notify::ChangeFeed;
pub use provider::RecordProvider;
