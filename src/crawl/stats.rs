// src/crawl/stats.rs
// =============================================================================
// Counters collected during one crawl run, and the report returned at the end.
//
// The orchestrator owns a RunStats value, updates it while it walks the site
// and hands it back inside a RunReport. Nothing here is global or persisted.
// =============================================================================

use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Addresses whose content was obtained (from the network or the cache)
    pub crawled: usize,
    /// Times an already-claimed address turned up again
    pub duplicates: usize,
    /// Distinct out-of-domain domains that were seen
    pub rejected_domains: BTreeSet<String>,
    /// Times an out-of-domain address turned up
    pub rejected_hits: usize,
    /// Addresses whose download failed and were skipped
    pub failed: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_addresses: Vec<String>,
}

impl RunStats {
    pub fn record_crawled(&mut self) {
        self.crawled += 1;
    }

    pub fn record_duplicate(&mut self) {
        self.duplicates += 1;
    }

    pub fn record_rejected(&mut self, domain: String) {
        self.rejected_hits += 1;
        self.rejected_domains.insert(domain);
    }

    pub fn record_failed(&mut self, address: &str) {
        self.failed += 1;
        self.failed_addresses.push(address.to_string());
    }
}

/// Everything a finished crawl hands back
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub start_url: String,
    pub allowed_domain: String,
    pub cache_enabled: bool,
    #[serde(flatten)]
    pub stats: RunStats,
    /// Every address that was claimed, in visiting order
    pub visited: Vec<String>,
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs_f64")]
    pub elapsed: Duration,
}

impl RunReport {
    /// True when no accepted address had to be skipped
    pub fn is_complete(&self) -> bool {
        self.stats.failed == 0
    }
}

fn as_secs_f64<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_domains_are_a_set_but_hits_are_counted() {
        let mut stats = RunStats::default();
        stats.record_rejected("other.test".to_string());
        stats.record_rejected("other.test".to_string());
        stats.record_rejected("third.test".to_string());

        assert_eq!(stats.rejected_hits, 3);
        assert_eq!(
            stats.rejected_domains.iter().collect::<Vec<_>>(),
            vec!["other.test", "third.test"]
        );
    }

    #[test]
    fn test_report_serializes_flat() {
        let mut stats = RunStats::default();
        stats.record_crawled();
        stats.record_duplicate();
        let report = RunReport {
            start_url: "http://site.test/".to_string(),
            allowed_domain: "site.test".to_string(),
            cache_enabled: false,
            stats,
            visited: vec!["http://site.test/".to_string()],
            elapsed: Duration::from_millis(1500),
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["crawled"], 1);
        assert_eq!(json["duplicates"], 1);
        assert_eq!(json["elapsed_secs"], 1.5);
        assert!(json.get("failed_addresses").is_none());
        assert!(report.is_complete());
    }
}
