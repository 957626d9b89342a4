//! Search index database.
//!
//! Writes `docSet.dsidx`, the SQLite store a documentation browser queries to
//! resolve display names to page paths. Fixed schema:
//!
//! ```sql
//! CREATE TABLE searchIndex(id INTEGER PRIMARY KEY, name TEXT, type TEXT, path TEXT)
//! ```
//!
//! Rows: one `Guide` row for the index page, then two `Entry` rows per
//! document (page + mind map), so a successful build always has `1 + 2n`
//! rows. Paths are the URL-encoded names relative to the Documents directory.
//!
//! Document rows go through one prepared, parameterized statement inside a
//! single transaction. Parameter binding is load-bearing, not just style:
//! document names come from arbitrary file names and may contain quotes.
//! The connection is closed on every exit path by virtue of being owned here.

use crate::catalog::Catalog;
use rusqlite::{Connection, params};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchIndexError {
    #[error("search index error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// File name of the store, fixed by the docset layout.
pub const DSIDX_FILE_NAME: &str = "docSet.dsidx";

/// Display name of the index-page row, matching the upstream docsets this
/// tool produces.
pub const GUIDE_LABEL: &str = "索引页";

/// Suffix distinguishing a document's mind-map row from its page row.
pub const MINDMAP_MARKER: &str = "_思维导图";

const CREATE_TABLE: &str =
    "CREATE TABLE searchIndex(id INTEGER PRIMARY KEY, name TEXT, type TEXT, path TEXT);";

const INSERT_ROW: &str = "INSERT INTO searchIndex(name, type, path) VALUES (?1, ?2, ?3)";

/// Create a fresh `docSet.dsidx` in `resources_dir` describing the catalog.
///
/// `index_url_name` is the URL-encoded name of the generated index page.
/// Requires a fully rendered catalog: every entry's URL names must be set.
pub fn write(
    resources_dir: &Path,
    catalog: &Catalog,
    index_url_name: &str,
) -> Result<(), SearchIndexError> {
    let mut conn = Connection::open(resources_dir.join(DSIDX_FILE_NAME))?;
    conn.execute_batch(CREATE_TABLE)?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(INSERT_ROW)?;
        stmt.execute(params![GUIDE_LABEL, "Guide", index_url_name])?;

        for entry in &catalog.entries {
            stmt.execute(params![entry.display_name(), "Entry", entry.html_url_name])?;
            stmt.execute(params![
                format!("{}{}", entry.display_name(), MINDMAP_MARKER),
                "Entry",
                entry.mm_url_name,
            ])?;
        }
    }
    tx.commit()?;

    Ok(())
}
