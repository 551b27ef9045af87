//! Client for the hosted document store backing muster.
//!
//! The store speaks JSON over HTTP and knows nothing about calendars:
//! it hands back raw documents with camelCase fields and
//! seconds/nanos timestamps. Everything is decoded into
//! `muster-core` types at this boundary; nothing schemaless leaks
//! past it.

pub mod client;
pub mod document;
pub mod error;

pub use client::{FetchedEvents, StoreClient};
pub use document::DecodeError;
pub use error::{StoreError, StoreResult};
