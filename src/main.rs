// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (RUST_LOG wins over --quiet)
// 3. Merge the optional config file with the command-line flags
// 4. Crawl the site and print the run report
// 5. Exit with proper code (0 = every page fetched, 1 = some pages skipped,
//    2 = the crawl could not run or was aborted)
// =============================================================================

mod cache;    // src/cache/ - write-once on-disk page cache
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - run configuration
mod crawl;    // src/crawl/ - domain filter, visited set, crawl loop
mod error;    // src/error.rs - CrawlError
mod extract;  // src/extract/ - link extraction from HTML
mod fetch;    // src/fetch/ - HTTP page downloads

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::Cli;
use config::{CrawlConfig, OnError};
use crawl::RunReport;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = build_config(&cli)?;

    let allowed_domain = match &cli.domain {
        Some(domain) => domain.clone(),
        None => {
            let domain = crawl::domain_of(&cli.start_url);
            if domain.is_empty() {
                return Err(anyhow!(
                    "Cannot tell the domain of '{}', pass --domain",
                    cli.start_url
                ));
            }
            domain
        }
    };

    let report = crawl::crawl(&cli.start_url, &allowed_domain, &config).await?;

    print_report(&report, cli.json)?;

    if report.is_complete() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Config file first (if any), then command-line flags on top
fn build_config(cli: &Cli) -> Result<CrawlConfig> {
    let mut config = match &cli.config {
        Some(path) => CrawlConfig::from_file(path)?,
        None => CrawlConfig::default(),
    };

    if cli.no_cache {
        config.cache_enabled = false;
    }
    if let Some(dir) = &cli.cache_dir {
        config.cache_dir = dir.clone();
    }
    if cli.fail_fast {
        config.on_fetch_error = OnError::Fail;
    }
    if let Some(secs) = cli.timeout {
        config.timeout_secs = secs;
    }

    Ok(config)
}

fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_summary(report);
    }
    Ok(())
}

fn print_summary(report: &RunReport) {
    let stats = &report.stats;
    let rejected: Vec<&str> = stats.rejected_domains.iter().map(String::as_str).collect();

    println!();
    println!("📊 Summary for {} ({})", report.start_url, report.allowed_domain);
    println!("   🗂️  Caching enabled: {}", report.cache_enabled);
    println!("   📄 Crawled urls: {}", stats.crawled);
    println!("   🔁 Duplicate urls: {}", stats.duplicates);
    println!("   🚫 Not allowed domains: {{{}}}", rejected.join(", "));
    println!("   🚫 Not allowed domains count: {}", stats.rejected_hits);
    if stats.failed > 0 {
        println!("   ❌ Failed urls: {}", stats.failed);
        for address in &stats.failed_addresses {
            println!("      {}", address);
        }
    }
    println!("   ⏱️  Time spent: {:.6} s", report.elapsed.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "domain-crawler",
            "http://site.test/",
            "--no-cache",
            "--cache-dir",
            "pages",
            "--fail-fast",
            "--timeout",
            "2",
        ])
        .unwrap();

        let config = build_config(&cli).unwrap();

        assert!(!config.cache_enabled);
        assert_eq!(config.cache_dir, PathBuf::from("pages"));
        assert_eq!(config.on_fetch_error, OnError::Fail);
        assert_eq!(config.timeout_secs, 2);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"cacheDir": "from-file", "timeoutSecs": 30, "onFetchError": "Fail"}"#,
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "domain-crawler",
            "http://site.test/",
            "--config",
            path.as_str(),
            "--timeout",
            "5",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();

        assert_eq!(config.cache_dir, PathBuf::from("from-file"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.on_fetch_error, OnError::Fail);
        assert!(config.cache_enabled);
    }
}
