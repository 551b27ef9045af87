//! Core types for the muster event-coordination tools.
//!
//! This crate provides the types shared by the muster CLI and the
//! document-store client:
//! - `Event` and `EventRecord` for event and performance-record data
//! - `calendar` module for the month-grid model (grid building, event
//!   placement, period navigation)
//! - `reminder` module for computing reminder trigger times

pub mod calendar;
pub mod event;
pub mod record;
pub mod reminder;

// Re-export the data types at crate root for convenience
pub use event::Event;
pub use record::EventRecord;
