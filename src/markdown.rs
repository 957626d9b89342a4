//! Markdown to HTML conversion.
//!
//! The page renderer behind [`render::render_html`](crate::render::render_html).
//! Converts one Markdown source file into a complete, standalone HTML document:
//! [pulldown-cmark](https://docs.rs/pulldown-cmark) for the body, a
//! [maud](https://maud.lambda.xyz/) shell around it with the stylesheet
//! embedded inline, so every page works as a single file with no sibling
//! assets.
//!
//! ## Math
//!
//! With [`RenderOptions::math`] enabled, TeX delimiters (`$...$`, `\(...\)`,
//! `$$...$$`) are left untouched in the body and a MathJax loader is appended
//! to the page, typesetting in the browser. In offline mode no CDN script is
//! emitted and the TeX source stays visible as written.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkdownError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/docset.css");

const MATHJAX_URL: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js";

const MATHJAX_CONFIG: &str = "\
window.MathJax = { tex: { inlineMath: [['$', '$'], ['\\\\(', '\\\\)']] } };";

/// Rendering options, fixed per build.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Typeset TeX math via MathJax.
    pub math: bool,
    /// Emit no CDN assets; pages must render with zero network access.
    pub offline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            math: true,
            offline: false,
        }
    }
}

/// Converts Markdown files to standalone HTML pages.
///
/// Stateless apart from its options; shared by reference across the rayon
/// render workers.
#[derive(Debug, Default)]
pub struct MarkdownEngine {
    options: RenderOptions,
}

impl MarkdownEngine {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Read `path` and render it as a complete HTML document.
    ///
    /// The page title is the file base name. Fails on any read error,
    /// including non-UTF-8 content.
    pub fn render_file(&self, path: &Path) -> Result<String, MarkdownError> {
        let source = fs::read_to_string(path)?;
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.render(&source, &title))
    }

    /// Render Markdown text as a complete HTML document.
    pub fn render(&self, source: &str, title: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        let parser = Parser::new_ext(source, options);
        let mut body = String::new();
        md_html::push_html(&mut body, parser);

        self.page(title, &body).into_string()
    }

    fn page(&self, title: &str, body: &str) -> Markup {
        let mathjax = self.options.math && !self.options.offline;
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    style { (PreEscaped(CSS)) }
                    @if mathjax {
                        script { (PreEscaped(MATHJAX_CONFIG)) }
                        script src=(MATHJAX_URL) async {}
                    }
                }
                body {
                    article.markdown-body {
                        (PreEscaped(body))
                    }
                }
            }
        }
    }
}
