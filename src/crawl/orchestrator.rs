// src/crawl/orchestrator.rs
// =============================================================================
// Walks a single website depth-first, starting from one URL.
//
// How it works:
// 1. Pop an address from the work stack
// 2. Reject it if it is not on the allowed domain (counted, never fetched)
// 3. Skip it if it was already claimed (counted as a duplicate)
// 4. Get its content from the cache, or the network on a miss
// 5. Extract its links; links already claimed count as duplicates, the rest
//    are pushed so the first link on the page is the next one visited
// 6. Repeat until the stack is empty
//
// Using an explicit stack instead of recursion gives the same pre-order walk
// (first link explored to exhaustion before its siblings) without growing
// the call stack on deep sites. Cycles end because an address can only be
// claimed once.
// =============================================================================

use std::time::Instant;
use url::Url;

use crate::cache::CacheStore;
use crate::config::{CrawlConfig, OnError};
use crate::error::CrawlError;
use crate::extract::extract_links;
use crate::fetch::{Fetcher, HttpFetcher};

use super::domain;
use super::frontier::VisitedSet;
use super::stats::{RunReport, RunStats};

pub struct Crawler<F> {
    fetcher: F,
    cache: CacheStore,
    on_fetch_error: OnError,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, cache: CacheStore, on_fetch_error: OnError) -> Self {
        Self {
            fetcher,
            cache,
            on_fetch_error,
        }
    }

    /// Crawls every page of `allowed_domain` reachable from `start_url`
    ///
    /// Returns the run report, or the first error that was not skipped.
    pub async fn crawl(
        &self,
        start_url: &str,
        allowed_domain: &str,
    ) -> Result<RunReport, CrawlError> {
        let started = Instant::now();

        // Serialize the seed the same way resolved links are serialized, so
        // "http://site.test" and a link back to "http://site.test/" are one address
        let start = Url::parse(start_url)
            .map_err(|source| CrawlError::InvalidStart {
                url: start_url.to_string(),
                source,
            })?
            .to_string();

        log::info!("Crawling started");
        log::info!("Start url - {}", start);
        log::info!("Caching is enabled - {}", self.cache.is_enabled());

        let mut visited = VisitedSet::new();
        let mut stats = RunStats::default();
        let mut pending = vec![start.clone()];

        while let Some(address) = pending.pop() {
            if !domain::is_allowed(&address, allowed_domain) {
                log::debug!("Skipping not allowed domain - {}", address);
                stats.record_rejected(domain::domain_of(&address));
                continue;
            }

            if !visited.is_new(&address) {
                log::debug!("Skipping duplicate url - {}", address);
                stats.record_duplicate();
                continue;
            }

            log::info!("Processing - {}", address);
            let content = match self.cache.get_or_fetch(&address, &self.fetcher).await {
                Ok(content) => content,
                Err(CrawlError::Fetch(e)) if self.on_fetch_error == OnError::SkipAndLog => {
                    log::warn!("Skipping url: {}", e);
                    stats.record_failed(e.url());
                    continue;
                }
                Err(e) => return Err(e),
            };
            stats.record_crawled();

            let mut next = Vec::new();
            for link in extract_links(&address, &content) {
                if visited.contains(&link) {
                    stats.record_duplicate();
                } else {
                    next.push(link);
                }
            }
            // Reversed so the first link on the page is popped first
            pending.extend(next.into_iter().rev());
        }

        if visited.is_empty() {
            log::warn!("Nothing crawled: {} is not on {}", start, allowed_domain);
        }

        let elapsed = started.elapsed();
        log::info!(
            "Crawling finished: {} urls in {:.6} s",
            visited.len(),
            elapsed.as_secs_f64()
        );

        Ok(RunReport {
            start_url: start,
            allowed_domain: allowed_domain.to_string(),
            cache_enabled: self.cache.is_enabled(),
            stats,
            visited: visited.into_addresses(),
            elapsed,
        })
    }
}

/// Crawls `allowed_domain` from `start_url` over HTTP, using the cache
/// settings and error policy from `config`
pub async fn crawl(
    start_url: &str,
    allowed_domain: &str,
    config: &CrawlConfig,
) -> Result<RunReport, CrawlError> {
    let fetcher =
        HttpFetcher::new(&config.user_agent, config.timeout()).map_err(CrawlError::Client)?;

    let cache = if config.cache_enabled {
        CacheStore::open(&config.cache_dir).await?
    } else {
        CacheStore::disabled()
    };

    Crawler::new(fetcher, cache, config.on_fetch_error)
        .crawl(start_url, allowed_domain)
        .await
}
