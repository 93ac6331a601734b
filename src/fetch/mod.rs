// src/fetch/mod.rs
// =============================================================================
// Page downloading.
//
// Submodules:
// - http: the Fetcher trait, the reqwest-backed implementation and FetchError
// =============================================================================

mod http;

pub use http::{FetchError, Fetcher, HttpFetcher};
