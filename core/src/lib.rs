//! Normalization and lookup engine.
//!
//! [`providers`] turn raw manifests into canonical ranges, [`catalog`] holds
//! them in load order and answers containment queries, and [`record`] renders
//! them for export. [`export`] and [`query`] drive those pieces over byte
//! streams so the binary only has to open files.

pub mod catalog;
pub mod export;
pub mod providers;
pub mod query;
pub mod record;
pub mod store;
