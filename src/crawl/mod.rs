// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling starting from a URL
// - Single-domain restriction ("www." is ignored, subdomains are not)
// - Every address is fetched at most once per run
// - Optional on-disk cache so a re-run does not hit the network again
//
// Submodules:
// - domain: is an address on the allowed site?
// - frontier: which addresses have already been claimed
// - stats: run counters and the final report
// - orchestrator: the crawl loop itself
// =============================================================================

mod domain;
mod frontier;
mod orchestrator;
mod stats;

pub use domain::domain_of;
pub use orchestrator::crawl;
pub use stats::RunReport;
