//! Catalog ingestion: from raw fetched entries to draftable creatures.
//!
//! Fetching and JSON parsing happen outside the engine; this module takes
//! the parsed name -> entry mapping and reduces it to the standard
//! eligible subset, sorted by strength.

pub mod entry;
pub mod filter;

pub use entry::RawEntry;
pub use filter::{standard_creatures, MAX_CATALOG_NUM};
