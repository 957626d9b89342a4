//! Build orchestration.
//!
//! Runs the whole docset build as one linear pipeline:
//!
//! ```text
//! Init → Collect → RenderDocuments → RenderIndex
//!      → WriteMetadata → WriteSearchIndex → [Package] → Done
//! ```
//!
//! Init destructively resets the `{name}.docset` output directory — whatever
//! was there before is discarded — then the nested
//! `Contents/Resources/Documents` tree is created before any rendering.
//!
//! Per-document rendering fans out over the rayon pool: each worker owns one
//! catalog entry and writes only that entry's two output files, so no
//! synchronization is needed. `try_for_each` is both the fail-fast
//! short-circuit and the join barrier — the index page and search index only
//! ever observe a fully rendered catalog.
//!
//! Any error aborts the pipeline. Output already written by the failed run is
//! left in place; the next run starts from a clean slate via the Init reset.

use crate::catalog::Catalog;
use crate::collect::{self, CollectError};
use crate::index_page::{self, INDEX_FILE_NAME, IndexPageError};
use crate::markdown::{MarkdownEngine, RenderOptions};
use crate::package::{self, ArchiveFormat, PackageError};
use crate::plist::{self, PlistError};
use crate::render::{self, RenderError};
use crate::search_index::{self, SearchIndexError};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Collect(#[from] CollectError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    IndexPage(#[from] IndexPageError),
    #[error(transparent)]
    SearchIndex(#[from] SearchIndexError),
    #[error(transparent)]
    Plist(#[from] PlistError),
    #[error(transparent)]
    Package(#[from] PackageError),
}

/// Everything a build needs, assembled by the CLI.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory tree of Markdown documents.
    pub input: PathBuf,
    /// Directory the `{docname}.docset` bundle is created in.
    pub output: PathBuf,
    /// Display name of the docset.
    pub docname: String,
    /// Markdown rendering options.
    pub render: RenderOptions,
    /// Archive the finished bundle, if requested.
    pub package: Option<ArchiveFormat>,
}

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    /// The fully rendered catalog.
    pub catalog: Catalog,
    /// Root of the generated `{docname}.docset` bundle.
    pub docset_dir: PathBuf,
    /// The archive, when packaging was requested.
    pub archive: Option<PathBuf>,
}

/// Run the full pipeline.
pub fn build(opts: &BuildOptions) -> Result<BuildReport, BuildError> {
    let docset_dir = opts.output.join(format!("{}.docset", opts.docname));
    reset_workspace(&docset_dir)?;

    let contents_dir = docset_dir.join("Contents");
    let resources_dir = contents_dir.join("Resources");
    let documents_dir = resources_dir.join("Documents");
    fs::create_dir_all(&documents_dir)?;

    let mut catalog = collect::collect(&opts.input)?;

    let engine = MarkdownEngine::new(opts.render);
    catalog.entries.par_iter_mut().try_for_each(|entry| {
        render::render_html(entry, &documents_dir, &engine)?;
        render::render_mindmap(entry, &documents_dir)
    })?;

    index_page::build(&catalog, &documents_dir)?;
    plist::write(&contents_dir, &opts.docname)?;

    let index_url_name = urlencoding::encode(INDEX_FILE_NAME);
    search_index::write(&resources_dir, &catalog, &index_url_name)?;

    let archive = match opts.package {
        Some(ArchiveFormat::Tgz) => Some(package::package(&opts.output, &opts.docname)?),
        None => None,
    };

    Ok(BuildReport {
        catalog,
        docset_dir,
        archive,
    })
}

/// Remove `dir` and everything under it, then recreate it empty.
///
/// The one destructive step of the pipeline, called exactly once at Init.
pub fn reset_workspace(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)
}
