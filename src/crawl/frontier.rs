// src/crawl/frontier.rs
// =============================================================================
// The set of addresses a crawl has already claimed.
//
// It only ever grows. `is_new` is check-and-insert in one call, so whoever
// asks first owns the address; `contains` looks without claiming.
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<String>,
    // Claim order, for the run report
    order: Vec<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `address`. Returns false if it was already claimed.
    pub fn is_new(&mut self, address: &str) -> bool {
        if self.seen.contains(address) {
            return false;
        }
        self.seen.insert(address.to_string());
        self.order.push(address.to_string());
        true
    }

    pub fn contains(&self, address: &str) -> bool {
        self.seen.contains(address)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Every claimed address, in the order it was claimed
    pub fn into_addresses(self) -> Vec<String> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_claim_wins() {
        let mut visited = VisitedSet::new();
        assert!(visited.is_new("http://site.test/"));
        assert!(!visited.is_new("http://site.test/"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_contains_does_not_claim() {
        let mut visited = VisitedSet::new();
        assert!(!visited.contains("http://site.test/a"));
        assert!(visited.is_empty());
        assert!(visited.is_new("http://site.test/a"));
        assert!(visited.contains("http://site.test/a"));
    }

    #[test]
    fn test_no_canonicalization() {
        let mut visited = VisitedSet::new();
        assert!(visited.is_new("http://site.test/a"));
        assert!(visited.is_new("http://site.test/a/"));
        assert!(visited.is_new("http://site.test/a#top"));
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn test_addresses_keep_claim_order() {
        let mut visited = VisitedSet::new();
        for address in ["http://site.test/c", "http://site.test/a", "http://site.test/c", "http://site.test/b"] {
            visited.is_new(address);
        }
        assert_eq!(
            visited.into_addresses(),
            vec!["http://site.test/c", "http://site.test/a", "http://site.test/b"]
        );
    }
}
