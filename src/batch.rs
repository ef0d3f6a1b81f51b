//! Directory drivers for the two tools.
//!
//! Both walk the directly-contained entries of an input directory, pick out
//! the files whose names end in `.html` (case-sensitive), transform each one,
//! and write the result under the output directory. Processing is strictly
//! sequential in directory-listing order, which is passed through as-is and
//! carries no guarantee. Any read, transform, or write failure aborts the
//! whole batch; there is no partial-failure recovery.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::compress;
use crate::minify::Minifier;
use crate::report::FileReport;

/// Minify every `.html` file in `input_dir` into a same-named file in
/// `output_dir`, creating `output_dir` if needed.
///
/// Returns one [`FileReport`] per processed file, in processing order.
/// Sizes are UTF-8 byte lengths of the in-memory documents.
pub fn minify_dir(
    minifier: &Minifier,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<FileReport>> {
    ensure_output_dir(output_dir)?;

    let mut reports = Vec::new();
    for (path, name) in html_entries(input_dir)? {
        let original = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let minified = minifier.minify(&original)?;

        let output_path = output_dir.join(&name);
        fs::write(&output_path, &minified)
            .with_context(|| format!("writing {}", output_path.display()))?;
        debug!("minified {} into {}", path.display(), output_path.display());

        reports.push(FileReport::new(name, original.len(), minified.len()));
    }
    Ok(reports)
}

/// Gzip-compress every `.html` file in `input_dir` into `<name>.gz` in
/// `output_dir`, creating `output_dir` if needed.
pub fn compress_dir(input_dir: &Path, output_dir: &Path) -> Result<Vec<FileReport>> {
    ensure_output_dir(output_dir)?;

    let mut reports = Vec::new();
    for (path, name) in html_entries(input_dir)? {
        let data = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        let compressed = compress::gzip(&data)?;

        let output_path = output_dir.join(format!("{name}.gz"));
        fs::write(&output_path, &compressed)
            .with_context(|| format!("writing {}", output_path.display()))?;
        debug!(
            "compressed {} into {}",
            path.display(),
            output_path.display()
        );

        reports.push(FileReport::new(name, data.len(), compressed.len()));
    }
    Ok(reports)
}

fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))
}

/// Entries of `dir` whose file names end in `.html`, in listing order.
///
/// The suffix match is case-sensitive (`INDEX.HTML` is skipped), and entries
/// are not required to be regular files here; a matching directory fails
/// later at the read, which aborts the batch like any other I/O error.
fn html_entries(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let listing =
        fs::read_dir(dir).with_context(|| format!("listing input directory {}", dir.display()))?;

    let mut entries = Vec::new();
    for entry in listing {
        let entry = entry.with_context(|| format!("listing input directory {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(".html") {
            entries.push((entry.path(), name.to_string()));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_html_entries_filters_by_suffix() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("index.html"), "<p>a</p>").expect("write");
        fs::write(dir.path().join("INDEX.HTML"), "<p>b</p>").expect("write");
        fs::write(dir.path().join("notes.txt"), "plain").expect("write");

        let entries = html_entries(dir.path()).expect("list");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, "index.html");
    }

    #[test]
    fn test_missing_input_dir_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("no-such-dir");
        assert!(html_entries(&missing).is_err());
    }
}
