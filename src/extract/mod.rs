// src/extract/mod.rs
// =============================================================================
// Link extraction from downloaded pages.
//
// Submodules:
// - html: parses a page and resolves every <a href> to an absolute URL
// =============================================================================

mod html;

pub use html::extract_links;
