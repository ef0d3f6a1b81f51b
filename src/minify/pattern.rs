//! Pattern-based minification.
//!
//! A fixed sequence of substitutions over the whole document: comments,
//! inter-tag whitespace, line edges, whitespace runs, line breaks, then
//! the bodies of `<style>` and `<script>` elements. Tolerant of malformed
//! input and never fails; it is a text transform, not a validating parser.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// Staged pattern minifier with every pattern compiled up front.
///
/// Construction is cheap enough to do once per tool run; the same instance
/// is reused for every document in a batch.
#[derive(Debug)]
pub struct PatternMinifier {
    comment: Regex,
    between_tags: Regex,
    leading_ws: Regex,
    trailing_ws: Regex,
    ws_runs: Regex,
    style_block: Regex,
    script_block: Regex,
    css: CssRules,
    js: JsRules,
}

/// Patterns for `<style>` bodies.
#[derive(Debug)]
struct CssRules {
    block_comment: Regex,
    around_punct: Regex,
    ws_runs: Regex,
}

/// Patterns for `<script>` bodies.
#[derive(Debug)]
struct JsRules {
    line_comment: Regex,
    block_comment: Regex,
    ws_runs: Regex,
    around_punct: Regex,
    keyword_fixups: Vec<(Regex, &'static str)>,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern compiles")
}

impl Default for PatternMinifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMinifier {
    pub fn new() -> Self {
        Self {
            comment: compile(r"(?s)<!--(.*?)-->"),
            between_tags: compile(r">\s+<"),
            leading_ws: compile(r"(?m)^\s+"),
            trailing_ws: compile(r"(?m)\s+$"),
            ws_runs: compile(r"\s{2,}"),
            style_block: compile(r"(?is)<style[^>]*>(.*?)</style>"),
            script_block: compile(r"(?is)<script[^>]*>(.*?)</script>"),
            css: CssRules {
                block_comment: compile(r"(?s)/\*.*?\*/"),
                around_punct: compile(r"\s*([{};:,>+~])\s*"),
                ws_runs: compile(r"\s+"),
            },
            js: JsRules {
                line_comment: compile(r"(^|[^:])//[^\n]*"),
                block_comment: compile(r"(?s)/\*.*?\*/"),
                ws_runs: compile(r"\s+"),
                around_punct: compile(r"\s*([{};:,=<>+\-*/&|!?])\s*"),
                // Applied in order after the operator pass; each entry keeps a
                // keyword readable while pinning the spacing around it.
                keyword_fixups: [
                    (r"function\s*\(", "function("),
                    (r"\)\s*\{", "){"),
                    (r"\}\s*else", "}else"),
                    (r"else\s*\{", "else{"),
                    (r"\}\s*catch", "}catch"),
                    (r"try\s*\{", "try{"),
                    (r"async\s+function", "async function"),
                    (r"await\s+", "await "),
                    (r"(const|let|var)\s+", "${1} "),
                    (r"return\s+", "return "),
                ]
                .into_iter()
                .map(|(pattern, replacement)| (compile(pattern), replacement))
                .collect(),
            },
        }
    }

    /// Run the full pipeline over an HTML document.
    ///
    /// Stages run in order, each on the previous stage's output: comment
    /// stripping, inter-tag whitespace deletion, per-line edge trimming,
    /// whitespace-run collapsing, line-break removal, embedded CSS, embedded
    /// JS, final trim. Note that the CSS/JS stages run after every line break
    /// has been deleted, so a `//` comment inside a script body consumes the
    /// rest of that body; see the module docs on `crate::minify` for the full
    /// list of inherited limitations.
    pub fn minify(&self, html: &str) -> String {
        // Remove HTML comments, keeping conditional comments.
        let html = self.strip_comments(html);

        // Remove whitespace between tags.
        let html = self.between_tags.replace_all(&html, "><");

        // Remove leading/trailing whitespace on every line.
        let html = self.leading_ws.replace_all(&html, "");
        let html = self.trailing_ws.replace_all(&html, "");

        // Collapse remaining whitespace runs to a single space.
        let html = self.ws_runs.replace_all(&html, " ");

        // Remove line breaks outright.
        let html = html.replace('\n', "").replace('\r', "");

        // Minify embedded CSS and JS.
        let html = self.minify_styles(&html);
        let html = self.minify_scripts(&html);

        html.trim().to_string()
    }

    /// Delete `<!-- ... -->` spans except conditional comments, whose content
    /// begins with `[if` and carries meaning for legacy browsers.
    fn strip_comments<'a>(&self, html: &'a str) -> Cow<'a, str> {
        self.comment.replace_all(html, |caps: &Captures| {
            if caps[1].starts_with("[if") {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
    }

    /// Minify every `<style>` body. The element is rebuilt as a bare
    /// `<style>` tag, dropping any attributes the source tag carried.
    fn minify_styles(&self, html: &str) -> String {
        self.style_block
            .replace_all(html, |caps: &Captures| {
                format!("<style>{}</style>", self.minify_css(&caps[1]))
            })
            .into_owned()
    }

    /// Minify every `<script>` body, with the same bare-tag rebuild as
    /// `minify_styles`.
    fn minify_scripts(&self, html: &str) -> String {
        self.script_block
            .replace_all(html, |caps: &Captures| {
                format!("<script>{}</script>", self.minify_js(&caps[1]))
            })
            .into_owned()
    }

    /// CSS body transform: comments out, whitespace off punctuation, drop a
    /// semicolon that sits against a closing brace, collapse the rest.
    fn minify_css(&self, css: &str) -> String {
        let css = self.css.block_comment.replace_all(css, "");
        let css = self.css.around_punct.replace_all(&css, "${1}");
        let css = css.replace(";}", "}");
        let css = self.css.ws_runs.replace_all(&css, " ");
        css.trim().to_string()
    }

    /// JS body transform. Line comments are removed only when `//` is not
    /// preceded by a colon, which keeps `http://`-style URLs intact. The
    /// whitespace passes do not track string or template literal boundaries.
    fn minify_js(&self, js: &str) -> String {
        let js = self.js.line_comment.replace_all(js, "${1}");
        let js = self.js.block_comment.replace_all(&js, "");
        let js = self.js.ws_runs.replace_all(&js, " ");
        let js = self.js.around_punct.replace_all(&js, "${1}");

        let mut js = js.into_owned();
        for (pattern, replacement) in &self.js.keyword_fixups {
            js = pattern.replace_all(&js, *replacement).into_owned();
        }

        js.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minifier() -> PatternMinifier {
        PatternMinifier::new()
    }

    #[test]
    fn test_plain_comment_removed() {
        let out = minifier().minify("<p>hi</p><!-- note -->");
        assert_eq!(out, "<p>hi</p>");
    }

    #[test]
    fn test_multiline_comment_removed() {
        let out = minifier().minify("<p>a</p><!-- spans\ntwo lines --><p>b</p>");
        assert_eq!(out, "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_conditional_comment_kept() {
        let html = "<!--[if lt IE 9]><link rel=\"stylesheet\" href=\"ie.css\"><![endif]-->";
        let out = minifier().minify(html);
        assert_eq!(out, html);
    }

    #[test]
    fn test_whitespace_between_tags_deleted() {
        let out = minifier().minify("<div>\n  </div>");
        assert_eq!(out, "<div></div>");
    }

    #[test]
    fn test_line_break_between_words_not_replaced_by_space() {
        // Line breaks are deleted outright, not turned into spaces.
        let out = minifier().minify("<p>Hello\nWorld</p>");
        assert_eq!(out, "<p>HelloWorld</p>");
    }

    #[test]
    fn test_whitespace_run_collapsed() {
        let out = minifier().minify("<p>one   two</p>");
        assert_eq!(out, "<p>one two</p>");
    }

    #[test]
    fn test_css_punctuation_tightened() {
        let out = minifier().minify("<style>a { color : red ; }</style>");
        assert_eq!(out, "<style>a{color:red}</style>");
    }

    #[test]
    fn test_css_comment_and_combinators() {
        let css = "/* palette */\ndiv > p , a + b {\n  margin : 0 ;\n}";
        assert_eq!(minifier().minify_css(css), "div>p,a+b{margin:0}");
    }

    #[test]
    fn test_css_keeps_single_interior_spaces() {
        assert_eq!(
            minifier().minify_css("a { margin : 0 auto ; }"),
            "a{margin:0 auto}"
        );
    }

    #[test]
    fn test_style_attributes_dropped_by_rebuild() {
        let out = minifier().minify("<style type=\"text/css\">a{b:c}</style>");
        assert_eq!(out, "<style>a{b:c}</style>");
    }

    #[test]
    fn test_js_keyword_spacing() {
        let out = minifier().minify("<script>const   x = 1;</script>");
        assert_eq!(out, "<script>const x=1;</script>");
    }

    #[test]
    fn test_js_function_and_branch_fixups() {
        let js = "function (a) { return a; }";
        assert_eq!(minifier().minify_js(js), "function(a){return a;}");

        let js = "if (a) { b(); } else { c(); }";
        assert_eq!(minifier().minify_js(js), "if (a){b();}else{c();}");

        let js = "try { x(); } catch (e) { y(); }";
        assert_eq!(minifier().minify_js(js), "try{x();}catch (e){y();}");
    }

    #[test]
    fn test_js_async_await_spacing() {
        let js = "async  function  load() {  await   fetchState();  }";
        assert_eq!(minifier().minify_js(js), "async function load(){await fetchState();}");
    }

    #[test]
    fn test_js_url_survives_comment_removal() {
        let js = "let u = 'http://example.com';\n// gone\nlet y = 2;";
        assert_eq!(minifier().minify_js(js), "let u='http://example.com';let y=2;");
    }

    #[test]
    fn test_js_block_comment_removed() {
        let js = "let a = 1; /* setup\n   state */ let b = 2;";
        assert_eq!(minifier().minify_js(js), "let a=1;let b=2;");
    }

    #[test]
    fn test_js_line_comment_at_start_of_body() {
        let js = "// header\nlet a = 1;";
        assert_eq!(minifier().minify_js(js), "let a=1;");
    }

    #[test]
    fn test_script_line_comment_swallows_rest_of_inline_body() {
        // Line breaks are gone before the JS stage runs, so a line comment
        // takes the remainder of the body with it. Inherited behavior.
        let out = minifier().minify("<script>\n// init\nlet x = 1;\n</script>");
        assert_eq!(out, "<script></script>");
    }

    #[test]
    fn test_script_attributes_dropped_by_rebuild() {
        let out = minifier().minify("<script src=\"app.js\"></script>");
        assert_eq!(out, "<script></script>");
    }

    #[test]
    fn test_case_insensitive_style_and_script_tags() {
        let out = minifier().minify("<STYLE>a { b : c ; }</STYLE><SCRIPT>let  x = 1;</SCRIPT>");
        assert_eq!(out, "<style>a{b:c}</style><script>let x=1;</script>");
    }

    #[test]
    fn test_document_edges_trimmed() {
        let out = minifier().minify("  \n<p>x</p>\n  ");
        assert_eq!(out, "<p>x</p>");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(minifier().minify(""), "");
    }

    #[test]
    fn test_minify_is_idempotent() {
        let html = "<html>\n  <head>\n    <style>\n      body { margin : 0 ; }\n    </style>\n  </head>\n  <body>\n    <p>Hello   world</p>\n    <script>\n      const x = 1;\n      let y = x + 2;\n    </script>\n  </body>\n</html>";
        let m = minifier();
        let once = m.minify(html);
        let twice = m.minify(&once);
        assert_eq!(once, twice);
    }
}
