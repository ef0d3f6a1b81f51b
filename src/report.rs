//! Per-file size accounting.
//!
//! Both tools report the same three numbers for every file they touch:
//! original size, output size, and the reduction as a percentage. Sizes are
//! byte lengths of the in-memory buffers.

use std::fmt;

/// Sizes recorded for one processed file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// File name without directory components.
    pub name: String,
    /// Input size in bytes.
    pub original_size: usize,
    /// Output size in bytes.
    pub output_size: usize,
}

impl FileReport {
    pub fn new(name: impl Into<String>, original_size: usize, output_size: usize) -> Self {
        Self {
            name: name.into(),
            original_size,
            output_size,
        }
    }

    /// Reduction as a percentage of the original size.
    ///
    /// Zero-byte originals report 0.0 rather than dividing by zero. A
    /// negative value means the output grew, which gzip can do on tiny
    /// inputs.
    pub fn reduction_percent(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            (1.0 - self.output_size as f64 / self.original_size as f64) * 100.0
        }
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} bytes ({:.1}% reduction)",
            self.name,
            self.original_size,
            self.output_size,
            self.reduction_percent()
        )
    }
}
