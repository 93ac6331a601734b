// src/extract/html.rs
// =============================================================================
// Pulls every link target out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (html5ever underneath)
// - Recovers from broken markup the way a browser does, so a messy page
//   still yields its links instead of an error
// - Supports CSS selectors for finding elements
//
// We use the `url` crate to resolve each href against the page it was found
// on. Relative paths, protocol-relative ("//host/x") and absolute hrefs all
// come out as one absolute URL string.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all links from HTML content, in document order
//
// Parameters:
//   base_url: the URL of the page (for resolving relative links)
//   html: the page body
//
// Returns: Vec<String> of absolute URLs. Nothing is filtered here: other
// domains and non-HTTP schemes are left for the domain filter to reject.
//
// Example:
//   base_url = "https://example.com/page"
//   html = "<a href='/docs'>Docs</a><a>no target</a>"
//   result = ["https://example.com/docs"]
pub fn extract_links(base_url: &str, html: &str) -> Vec<String> {
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Cannot resolve links of {}: invalid base URL ({})", base_url, e);
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);

    // "a[href]" = every <a> that has an href attribute; anchors without
    // one never match
    let selector = Selector::parse("a[href]").expect("constant selector is valid");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .filter_map(|href| resolve_href(&base, href))
        .collect()
}

// Resolves a possibly-relative href to an absolute URL
//
// Examples (base = "https://example.com/page/"):
//   "/docs"               -> Some("https://example.com/docs")
//   "../other"            -> Some("https://example.com/other")
//   "//cdn.example.com/x" -> Some("https://cdn.example.com/x")
//   "https://other.com"   -> Some("https://other.com/")
//   "http://[::1"         -> None (cannot be parsed at all)
pub fn resolve_href(base: &Url, href: &str) -> Option<String> {
    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            log::debug!("Skipping unresolvable href '{}' on {}: {}", href, base, e);
            None
        }
    }
}
