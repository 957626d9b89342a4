//! The in-memory document catalog shared across pipeline stages.
//!
//! [`collect`](crate::collect) produces the catalog; the renderers fill in the
//! per-document output fields; the index page and search index consume it
//! read-only once rendering has joined.

use std::path::PathBuf;

/// One discovered Markdown source document.
///
/// Created during collection with the output fields empty. Each renderer
/// writes its own pair of fields exactly once — HTML rendering sets
/// `html_path`/`html_url_name`, mind-map rendering sets `mm_path`/
/// `mm_url_name`. The field sets are disjoint, which is what makes parallel
/// per-document rendering safe without locking.
#[derive(Debug, Clone)]
pub struct DocumentEntry {
    /// Classify label derived from the source directory (empty at root level).
    pub classify: String,
    /// File base name without the `.md` extension. Never empty.
    pub name: String,
    /// Path to the source file, as discovered.
    pub source_path: PathBuf,
    /// On-disk path of the rendered HTML page. Empty until rendered.
    pub html_path: PathBuf,
    /// URL-encoded file name of the rendered HTML page. Empty until rendered.
    pub html_url_name: String,
    /// On-disk path of the rendered mind-map page. Empty until rendered.
    pub mm_path: PathBuf,
    /// URL-encoded file name of the rendered mind-map page. Empty until rendered.
    pub mm_url_name: String,
}

impl DocumentEntry {
    pub fn new(classify: String, name: String, source_path: PathBuf) -> Self {
        Self {
            classify,
            name,
            source_path,
            html_path: PathBuf::new(),
            html_url_name: String::new(),
            mm_path: PathBuf::new(),
            mm_url_name: String::new(),
        }
    }

    /// Display name used for search-index rows: `{classify}_{name}`.
    pub fn display_name(&self) -> String {
        format!("{}_{}", self.classify, self.name)
    }
}

/// Ordered catalog of all discovered documents.
///
/// Entry order is discovery order; the collector sorts traversal by file name
/// so the order is stable across runs and platforms.
#[derive(Debug)]
pub struct Catalog {
    /// The input root the catalog was collected from.
    pub input_dir: PathBuf,
    pub entries: Vec<DocumentEntry>,
}

/// Documents sharing one classify label, in catalog order.
#[derive(Debug)]
pub struct ClassificationGroup<'a> {
    pub label: &'a str,
    pub entries: Vec<&'a DocumentEntry>,
}

/// Group the catalog by classify label.
///
/// Groups appear in first-seen order; entries within a group keep catalog
/// order. Derived on demand — the catalog itself stores no grouping.
pub fn group_by_classify(catalog: &Catalog) -> Vec<ClassificationGroup<'_>> {
    let mut groups: Vec<ClassificationGroup<'_>> = Vec::new();
    for entry in &catalog.entries {
        match groups.iter_mut().find(|g| g.label == entry.classify) {
            Some(group) => group.entries.push(entry),
            None => groups.push(ClassificationGroup {
                label: &entry.classify,
                entries: vec![entry],
            }),
        }
    }
    groups
}
