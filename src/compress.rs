//! Gzip compression for firmware embedding.
//!
//! The embedded server streams the stored `.gz` bytes straight to clients
//! with `Content-Encoding: gzip`, so the output must be a complete gzip
//! container, compressed as hard as the format allows.

use std::io::Write;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;

/// Gzip-compress a byte buffer at maximum compression level.
pub fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(data)
        .context("writing data into gzip encoder")?;
    encoder.finish().context("finalizing gzip stream")
}
