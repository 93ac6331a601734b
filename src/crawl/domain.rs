// src/crawl/domain.rs
// =============================================================================
// Decides whether an address belongs to the site being crawled.
//
// Two domains match when their network locations are identical after a
// leading "www." is removed from each. There is no subdomain, wildcard or
// scheme matching: "blog.site.test" is NOT "site.test", and "http://" vs
// "https://" does not matter.
// =============================================================================

use url::{Position, Url};

/// Network location of `address` ("host", "host:port", "user@host"...) with
/// a leading "www." removed
///
/// Unparsable addresses, and addresses without an authority such as
/// `mailto:` links, give the empty string.
pub fn domain_of(address: &str) -> String {
    match Url::parse(address) {
        Ok(url) => strip_www(&url[Position::BeforeUsername..Position::AfterPort]).to_string(),
        Err(_) => String::new(),
    }
}

pub fn strip_www(domain: &str) -> &str {
    domain.strip_prefix("www.").unwrap_or(domain)
}

/// True iff `address` lives on `allowed_domain`
pub fn is_allowed(address: &str, allowed_domain: &str) -> bool {
    let allowed = strip_www(allowed_domain);
    !allowed.is_empty() && domain_of(address) == allowed
}
