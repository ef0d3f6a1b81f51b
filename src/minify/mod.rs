//! Text minification for embedded web assets.
//!
//! Two interchangeable backends produce a smaller, behavior-preserving
//! document from UTF-8 HTML:
//!
//! - [`Backend::Regex`]: staged pattern substitutions over the raw text,
//!   including best-effort passes over embedded `<style>` and `<script>`
//!   bodies. Fast, dependency-light, tolerant of malformed markup.
//! - [`Backend::Library`]: the `minify-html` parser-based minifier, behind
//!   the default-on `minify-html` cargo feature.
//!
//! The backends implement the same informal contract but are not
//! byte-equivalent; pick one per run and stick with it.
//!
//! ## Known limitations of the regex backend
//!
//! These are inherited behaviors, kept deliberately rather than fixed:
//!
//! - The JS passes do not track string, template-literal, or regex-literal
//!   boundaries, so whitespace and comment-like sequences inside literals
//!   can be altered.
//! - Line breaks are deleted from the whole document before the CSS/JS
//!   stages run, so a `//` line comment in a script body consumes the rest
//!   of that body.
//! - `<style>` and `<script>` elements are rebuilt as bare tags; attributes
//!   on the opening tag (`type`, `media`, `src`, ...) are dropped.
//!
//! Documents that need any of the above intact should use the library
//! backend.

mod pattern;

pub use pattern::PatternMinifier;

#[cfg(feature = "minify-html")]
mod library;

#[cfg(feature = "minify-html")]
pub use library::LibraryMinifier;

use anyhow::Result;
use clap::ValueEnum;

/// Which minification strategy a [`Minifier`] uses.
///
/// Selected once at construction; there is no runtime fallback from one
/// backend to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Staged pattern substitutions (the default).
    Regex,
    /// Parser-based minification via the `minify-html` crate.
    Library,
}

/// A configured minifier, ready to process any number of documents.
pub struct Minifier {
    inner: Inner,
}

enum Inner {
    Pattern(PatternMinifier),
    #[cfg(feature = "minify-html")]
    Library(LibraryMinifier),
}

impl Minifier {
    /// Build a minifier for the requested backend.
    ///
    /// Fails fast when [`Backend::Library`] is requested but the crate was
    /// built without the `minify-html` feature; a build that cannot minify
    /// must say so rather than silently pass documents through.
    pub fn new(backend: Backend) -> Result<Self> {
        let inner = match backend {
            Backend::Regex => Inner::Pattern(PatternMinifier::new()),
            #[cfg(feature = "minify-html")]
            Backend::Library => Inner::Library(LibraryMinifier::new()),
            #[cfg(not(feature = "minify-html"))]
            Backend::Library => anyhow::bail!(
                "library backend requested but this build lacks the `minify-html` feature"
            ),
        };
        Ok(Self { inner })
    }

    /// The backend this minifier was constructed with.
    pub fn backend(&self) -> Backend {
        match &self.inner {
            Inner::Pattern(_) => Backend::Regex,
            #[cfg(feature = "minify-html")]
            Inner::Library(_) => Backend::Library,
        }
    }

    /// Minify one HTML document.
    ///
    /// The regex backend never fails; the library backend can, in theory,
    /// produce non-UTF-8 output and reports that as an error.
    pub fn minify(&self, html: &str) -> Result<String> {
        match &self.inner {
            Inner::Pattern(m) => Ok(m.minify(html)),
            #[cfg(feature = "minify-html")]
            Inner::Library(m) => m.minify(html),
        }
    }
}
