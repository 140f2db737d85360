//! Shared model for `cloudrange`.
//!
//! Everything here is pure: the canonical [`network::range::Range`] record,
//! IPv4 boundary math, the region normalizer and the error type. The manifest
//! parsers and the catalog live in `cloudrange-core`.

pub mod config;
pub mod error;
pub mod network;
pub mod region;

pub use error::{ManifestFault, RangeError};
pub use network::range::{Range, RangeEntry, Source};
