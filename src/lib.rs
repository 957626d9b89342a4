//! # mddocset
//!
//! Build a documentation-browser docset from a directory of Markdown files.
//! Your filesystem is the data source: every `.md` file becomes a rendered
//! HTML page plus a mind-map visualization, grouped on an index page by its
//! directory-derived classification label, and registered in a SQLite search
//! index the browser queries.
//!
//! # Pipeline
//!
//! One linear build, orchestrated by [`pipeline::build`]:
//!
//! ```text
//! 1. Collect    input/       →  Catalog           (filesystem → structured data)
//! 2. Render     catalog      →  Documents/*.html  (page + mind map per document)
//! 3. Aggregate  catalog      →  index.html, Info.plist, docSet.dsidx
//! 4. Package    docset tree  →  {name}.docset.tgz (optional)
//! ```
//!
//! The aggregation steps run strictly after rendering has joined: the index
//! page and search index link the URL-encoded names the renderers record on
//! each catalog entry.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`classify`] | Directory path → classification label |
//! | [`catalog`] | Shared catalog types and on-demand grouping |
//! | [`collect`] | Sorted, filtered traversal producing the catalog |
//! | [`markdown`] | Markdown → standalone HTML page (pulldown-cmark + Maud) |
//! | [`mindmap`] | Markdown → tree + assets → self-contained mind-map page |
//! | [`render`] | Per-document output naming, URL-encoding, file writes |
//! | [`index_page`] | Grouped navigation page (`index.html`) |
//! | [`search_index`] | `docSet.dsidx` SQLite search index |
//! | [`plist`] | `Info.plist` descriptor from token substitution |
//! | [`package`] | Optional `.tgz` archive of the finished bundle |
//! | [`pipeline`] | Orchestration, workspace reset, error aggregation |
//! | [`output`] | CLI summary formatting |
//!
//! # Output Layout
//!
//! ```text
//! {output}/{name}.docset/
//! └── Contents/
//!     ├── Info.plist
//!     └── Resources/
//!         ├── docSet.dsidx
//!         └── Documents/
//!             ├── index.html
//!             ├── {classify}_{name}.html
//!             └── {classify}_{name}_mm.html
//! ```
//!
//! # Design Decisions
//!
//! ## Flat Output, Prefixed Names
//!
//! The source tree is flattened into one Documents directory; the directory
//! path survives as the `{classify}_` file-name prefix (separators replaced
//! by `_`). Root-level documents keep the uniform format with an empty prefix
//! (`_intro.html`). Documentation browsers resolve every page by a single
//! relative name, so a flat directory keeps the search-index paths trivial.
//!
//! ## Maud Over Template Engines
//!
//! All generated HTML (page shells, index page, mind-map template) uses
//! [Maud](https://maud.lambda.xyz/): compile-time checked, auto-escaped, and
//! no template directory to ship. The one exception is `Info.plist`, which is
//! literal `__NAME__` substitution over a plist template because the
//! descriptor format belongs to the documentation browser, not to us.
//!
//! ## Fail-Fast Builds
//!
//! One failed document fails the whole build with a nonzero exit; no partial
//! docset is ever reported as success. Each run destructively resets the
//! output bundle first, so a failed run's leftovers never leak into the next.
//!
//! ## Deterministic Ordering
//!
//! Traversal is sorted by file name at every level. Discovery order drives
//! the index page and the search-index rows, so two builds of the same tree
//! produce identical row sets.

pub mod catalog;
pub mod classify;
pub mod collect;
pub mod index_page;
pub mod markdown;
pub mod mindmap;
pub mod output;
pub mod package;
pub mod pipeline;
pub mod plist;
pub mod render;
pub mod search_index;
