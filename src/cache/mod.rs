// src/cache/mod.rs
// =============================================================================
// Write-once page cache, keyed by the SHA-256 of the page URL.
//
// Submodules:
// - store: CacheStore and its I/O error type
// =============================================================================

mod store;

pub use store::{CacheError, CacheStore};
