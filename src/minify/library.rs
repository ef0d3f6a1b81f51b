//! Library-backed minification via the `minify-html` crate.
//!
//! The stricter of the two backends: a real HTML parser with CSS and JS
//! minification, rather than pattern substitution. Output is smaller and
//! safer around string literals, but is not byte-identical to the pattern
//! backend's output.

use anyhow::{Context, Result};
use minify_html::{Cfg, minify};

/// Minifier that delegates to `minify-html`.
pub struct LibraryMinifier {
    cfg: Cfg,
}

impl Default for LibraryMinifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryMinifier {
    pub fn new() -> Self {
        Self {
            cfg: embedded_profile(),
        }
    }

    /// Minify one document.
    ///
    /// `minify-html` operates on bytes; the result is checked back into a
    /// `String` since every downstream consumer writes UTF-8 text.
    pub fn minify(&self, html: &str) -> Result<String> {
        let out = minify(html.as_bytes(), &self.cfg);
        String::from_utf8(out).context("minified output is not valid UTF-8")
    }
}

/// The settings the firmware asset build has always used: minify embedded
/// CSS/JS and the doctype, drop processing instructions, but keep closing
/// tags and the `<html>`/`<head>` opening tags so the served pages stay
/// friendly to the embedded server's streaming writes.
fn embedded_profile() -> Cfg {
    Cfg {
        minify_css: true,
        minify_js: true,
        keep_closing_tags: true,
        keep_html_and_head_opening_tags: true,
        remove_processing_instructions: true,
        do_not_minify_doctype: false,
        remove_bangs: false,
        ..Cfg::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrinks_and_keeps_structure() {
        let html = "<html>\n  <head>\n    <title>Test</title>\n  </head>\n  <body>\n    <p>Hello   world</p>\n  </body>\n</html>";
        let out = LibraryMinifier::new().minify(html).expect("minify");

        assert!(out.len() <= html.len());
        assert!(out.contains("<title>Test</title>"));
        assert!(out.contains("Hello world"));
        // Closing tags are configured to stay.
        assert!(out.contains("</body>"));
    }

    #[test]
    fn test_css_minified() {
        let html = "<html><head><style>a { color: red; }</style></head><body></body></html>";
        let out = LibraryMinifier::new().minify(html).expect("minify");
        assert!(out.contains("color:red"));
    }

    #[test]
    fn test_idempotent_on_simple_document() {
        let html = "<html><head></head><body><div><p>hi</p></div></body></html>";
        let m = LibraryMinifier::new();
        let once = m.minify(html).expect("first pass");
        let twice = m.minify(&once).expect("second pass");
        assert_eq!(once, twice);
    }
}
