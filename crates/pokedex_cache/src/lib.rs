//! Time-expiring cache for raw HTTP response bodies.
//!
//! This crate provides the caching infrastructure for the pokedex REPL,
//! reducing API calls by keeping recent response payloads in memory
//! until a background reaper expires them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;

pub use cache::{CacheEntry, ResponseCache};
