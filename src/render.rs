//! Per-document rendering.
//!
//! Each catalog entry produces two output files in the docset's Documents
//! directory, both named from the entry's classify label and base name:
//!
//! ```text
//! {classify}_{name}.html       # rendered page    (render_html)
//! {classify}_{name}_mm.html    # mind-map page    (render_mindmap)
//! ```
//!
//! A root-level document has an empty classify label; the leading `_` is kept
//! (`_intro.html`), so the naming format is uniform. Alongside the on-disk
//! path, each renderer records the URL-encoded form of the file name for the
//! index page and search index.
//!
//! The two renderers touch disjoint fields of [`DocumentEntry`] and write
//! distinct files, so the pipeline runs them concurrently per document. Any
//! failure is propagated: one failed document fails the whole build.

use crate::catalog::DocumentEntry;
use crate::markdown::{MarkdownEngine, MarkdownError};
use crate::mindmap::{self, MindMapError};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("markdown render failed: {0}")]
    Markdown(#[from] MarkdownError),
    #[error("mind-map render failed: {0}")]
    MindMap(#[from] MindMapError),
}

/// Render the entry's HTML page into `docs_dir`.
///
/// Sets `html_path` and `html_url_name` on success.
pub fn render_html(
    entry: &mut DocumentEntry,
    docs_dir: &Path,
    engine: &MarkdownEngine,
) -> Result<(), RenderError> {
    let file_name = format!("{}_{}.html", entry.classify, entry.name);
    let out_path = docs_dir.join(&file_name);

    let html = engine.render_file(&entry.source_path)?;
    fs::write(&out_path, html)?;

    entry.html_path = out_path;
    entry.html_url_name = urlencoding::encode(&file_name).into_owned();
    Ok(())
}

/// Render the entry's mind-map page into `docs_dir`.
///
/// Sets `mm_path` and `mm_url_name` on success.
pub fn render_mindmap(entry: &mut DocumentEntry, docs_dir: &Path) -> Result<(), RenderError> {
    let file_name = format!("{}_{}_mm.html", entry.classify, entry.name);
    let out_path = docs_dir.join(&file_name);

    let source = fs::read_to_string(&entry.source_path)?;
    let (root, features) = mindmap::transform(&source);
    let assets = mindmap::with_toolbar(mindmap::used_assets(&features));
    let html = mindmap::fill_template(&root, &assets)?;
    fs::write(&out_path, html)?;

    entry.mm_path = out_path;
    entry.mm_url_name = urlencoding::encode(&file_name).into_owned();
    Ok(())
}
