//! sitepack
//!
//! Build-time preprocessing for an embedded web server's static HTML assets.
//!
//! This library provides:
//! - HTML minification with embedded CSS/JS passes
//! - Gzip compression at maximum level for firmware embedding
//! - Directory batch drivers shared by the CLI tools
//! - Per-file size reporting

pub mod batch;
pub mod compress;
pub mod config;
pub mod minify;
pub mod report;

// Re-exports for clean public API
pub use minify::{Backend, Minifier};
pub use report::FileReport;
