// src/cli.rs
// =============================================================================
// Command-line interface, built with clap's derive API.
//
// Flags here override the values of the optional JSON config file.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "domain-crawler",
    version,
    about = "Crawl every page of one website, caching pages on disk",
    long_about = "domain-crawler starts from a URL and follows every link that stays on the same \
                  domain, visiting each page once. Downloaded pages are cached on disk so that \
                  running it again does not hit the network for pages it has already seen."
)]
pub struct Cli {
    /// URL to start crawling from (e.g., http://quotes.toscrape.com/)
    pub start_url: String,

    /// Only follow links on this domain ("www." is ignored).
    /// Defaults to the domain of the start URL.
    #[arg(long)]
    pub domain: Option<String>,

    /// Always download pages; never read or write the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Directory holding cached pages
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Stop the whole crawl on the first page that fails to download
    #[arg(long)]
    pub fail_fast: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// JSON config file (cacheEnabled, cacheDir, onFetchError, userAgent, timeoutSecs)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the run report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation() {
        let cli = Cli::try_parse_from(["domain-crawler", "http://site.test/"]).unwrap();
        assert_eq!(cli.start_url, "http://site.test/");
        assert_eq!(cli.domain, None);
        assert!(!cli.no_cache);
        assert!(!cli.fail_fast);
        assert!(!cli.json);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "domain-crawler",
            "http://site.test/",
            "--domain",
            "www.site.test",
            "--no-cache",
            "--cache-dir",
            "/tmp/pages",
            "--fail-fast",
            "--timeout",
            "3",
            "--json",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.domain.as_deref(), Some("www.site.test"));
        assert!(cli.no_cache);
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/pages")));
        assert!(cli.fail_fast);
        assert_eq!(cli.timeout, Some(3));
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_start_url_is_required() {
        assert!(Cli::try_parse_from(["domain-crawler"]).is_err());
    }
}
