//! Document discovery.
//!
//! Walks the input directory tree and builds the [`Catalog`] of Markdown
//! documents. Traversal is sorted by file name at every level, so discovery
//! order — and everything downstream of it: index page order, search index
//! rows — is deterministic across runs and platforms.
//!
//! Filtering rules:
//! - `.git` directories are pruned entirely (their subtrees are never entered)
//! - `.DS_Store` files are skipped
//! - only regular files whose name ends in `.md` become catalog entries
//!
//! Any filesystem error aborts the whole collection. There is no partial
//! catalog: the caller gets either a complete catalog or an error.

use crate::catalog::{Catalog, DocumentEntry};
use crate::classify::classify_label;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("traversal error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Names excluded from traversal. `.git` prunes a whole subtree,
/// `.DS_Store` is a plain file either way.
const EXCLUDED_NAMES: &[&str] = &[".git", ".DS_Store"];

/// Recursively collect all Markdown documents under `input`.
pub fn collect(input: &Path) -> Result<Catalog, CollectError> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(input)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !EXCLUDED_NAMES
                .iter()
                .any(|name| e.file_name() == *name)
        });

    for dirent in walker {
        let dirent = dirent?;
        if !dirent.file_type().is_file() {
            continue;
        }

        let file_name = dirent.file_name().to_string_lossy();
        let Some(stem) = file_name.strip_suffix(".md") else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }

        let dir = dirent.path().parent().unwrap_or(input);
        entries.push(DocumentEntry::new(
            classify_label(dir, input),
            stem.to_string(),
            dirent.path().to_path_buf(),
        ));
    }

    Ok(Catalog {
        input_dir: input.to_path_buf(),
        entries,
    })
}
