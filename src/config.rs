//! Command-line argument handling for both tools.
//!
//! The tools take positional input/output directory paths and nothing else,
//! except for the `minify` tool's backend selector. Parsing failures print
//! clap's usage message and exit with status 1, the exit code the asset
//! build has always checked for.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::minify::Backend;

/// Arguments for the `minify` tool.
#[derive(Debug, Parser)]
#[command(name = "minify")]
#[command(about = "Minify HTML assets for firmware embedding")]
#[command(version)]
pub struct MinifyArgs {
    /// Directory containing the `.html` files to process
    pub input_dir: PathBuf,

    /// Directory the minified files are written to (created if absent)
    pub output_dir: PathBuf,

    /// Minification strategy
    #[arg(long, value_enum, default_value_t = Backend::Regex)]
    pub backend: Backend,
}

/// Arguments for the `gzip_html` tool.
#[derive(Debug, Parser)]
#[command(name = "gzip_html")]
#[command(about = "Gzip-compress HTML assets for firmware embedding")]
#[command(version)]
pub struct GzipArgs {
    /// Directory containing the `.html` files to process
    pub input_dir: PathBuf,

    /// Directory the `.gz` files are written to (created if absent)
    pub output_dir: PathBuf,
}

/// Parse arguments, exiting with status 1 on failure.
///
/// clap's default error exit code is 2; the original tools exited 1 on a
/// missing argument and downstream build scripts test for exactly that.
pub fn parse_or_exit<A: Parser>() -> A {
    A::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_args_parse() {
        let args = MinifyArgs::try_parse_from(["minify", "data", "data_min"]).expect("parse");
        assert_eq!(args.input_dir, PathBuf::from("data"));
        assert_eq!(args.output_dir, PathBuf::from("data_min"));
        assert_eq!(args.backend, Backend::Regex);
    }

    #[test]
    fn test_minify_backend_flag() {
        let args = MinifyArgs::try_parse_from(["minify", "a", "b", "--backend", "library"])
            .expect("parse");
        assert_eq!(args.backend, Backend::Library);
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(MinifyArgs::try_parse_from(["minify", "only-one"]).is_err());
        assert!(GzipArgs::try_parse_from(["gzip_html"]).is_err());
    }
}
