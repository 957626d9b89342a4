//! Index page generation.
//!
//! Renders the single navigation page (`index.html`) for the docset: every
//! classification group in first-seen order, every document within it in
//! discovery order, each with a link to its rendered page and its mind map.
//!
//! Must run after all per-document rendering has completed — it links the
//! URL-encoded names the renderers record on each entry.
//!
//! HTML comes from [maud](https://maud.lambda.xyz/) templates, the same
//! compile-time approach used for the document shells.

use crate::catalog::{Catalog, ClassificationGroup, group_by_classify};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexPageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/docset.css");

/// Heading shown for the root-level group (empty classify label).
const ROOT_GROUP_HEADING: &str = "Top Level";

/// File name of the generated page, fixed by the docset layout.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Render `index.html` into `docs_dir`. Returns the written path.
pub fn build(catalog: &Catalog, docs_dir: &Path) -> Result<PathBuf, IndexPageError> {
    let groups = group_by_classify(catalog);
    let page = render_index(&groups);

    let path = docs_dir.join(INDEX_FILE_NAME);
    fs::write(&path, page.into_string())?;
    Ok(path)
}

fn render_index(groups: &[ClassificationGroup<'_>]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Index" }
                style { (PreEscaped(CSS)) }
            }
            body {
                h1 { "Index" }
                @for group in groups {
                    (render_group(group))
                }
            }
        }
    }
}

fn render_group(group: &ClassificationGroup<'_>) -> Markup {
    let heading = if group.label.is_empty() {
        ROOT_GROUP_HEADING
    } else {
        group.label
    };

    html! {
        h2 { (heading) }
        ul.index-group {
            @for entry in &group.entries {
                li {
                    a href=(entry.html_url_name) { (entry.name) }
                    a.mm-link href=(entry.mm_url_name) { "mind map" }
                }
            }
        }
    }
}
