// src/error.rs
// =============================================================================
// The error type returned by a crawl run.
//
// Out-of-domain and duplicate addresses are not errors; they are counted in
// the run statistics. Only the things below can stop a crawl.
// =============================================================================

use thiserror::Error;

use crate::cache::CacheError;
use crate::fetch::FetchError;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed address could not be parsed as an absolute URL
    #[error("invalid start URL '{url}': {source}")]
    InvalidStart {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be set up (bad TLS backend, bad user agent...)
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A page download failed while the policy was `OnError::Fail`
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Reading or writing the page cache failed
    #[error(transparent)]
    Cache(#[from] CacheError),
}
