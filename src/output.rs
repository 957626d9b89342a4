//! CLI output formatting for build results.
//!
//! The summary is information-centric: documents are listed under their
//! classification group with positional indexes, and generated file names are
//! shown as secondary context. Format functions are pure (return
//! `Vec<String>`, no I/O) with a `print_*` wrapper for stdout.
//!
//! ```text
//! guide (2 documents)
//!     001 intro → guide_intro.html (+ mind map)
//!     002 setup → guide_setup.html (+ mind map)
//! (top level) (1 document)
//!     001 readme → _readme.html (+ mind map)
//!
//! Indexed 7 search entries
//! Docset: out/Docs.docset
//! ```

use crate::catalog::group_by_classify;
use crate::pipeline::BuildReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn count_documents(count: usize) -> String {
    if count == 1 {
        "1 document".to_string()
    } else {
        format!("{count} documents")
    }
}

fn count_entries(count: usize) -> String {
    if count == 1 {
        "1 search entry".to_string()
    } else {
        format!("{count} search entries")
    }
}

/// Format the post-build summary.
pub fn format_build_summary(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    let groups = group_by_classify(&report.catalog);
    for group in &groups {
        let label = if group.label.is_empty() {
            "(top level)"
        } else {
            group.label
        };
        lines.push(format!("{} ({})", label, count_documents(group.entries.len())));
        for (pos, entry) in group.entries.iter().enumerate() {
            let file = entry
                .html_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            lines.push(format!(
                "    {} {} → {} (+ mind map)",
                format_index(pos + 1),
                entry.name,
                file
            ));
        }
    }

    if !groups.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Indexed {}",
        count_entries(1 + 2 * report.catalog.entries.len())
    ));
    lines.push(format!("Docset: {}", report.docset_dir.display()));
    if let Some(archive) = &report.archive {
        lines.push(format!("Package: {}", archive.display()));
    }

    lines
}

/// Print the post-build summary to stdout.
pub fn print_build_summary(report: &BuildReport) {
    for line in format_build_summary(report) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, DocumentEntry};
    use std::path::PathBuf;

    fn rendered_entry(classify: &str, name: &str) -> DocumentEntry {
        let mut entry = DocumentEntry::new(
            classify.to_string(),
            name.to_string(),
            PathBuf::from(format!("/content/{name}.md")),
        );
        entry.html_path = PathBuf::from(format!("/out/{classify}_{name}.html"));
        entry
    }

    fn report(entries: Vec<DocumentEntry>) -> BuildReport {
        BuildReport {
            catalog: Catalog {
                input_dir: PathBuf::from("/content"),
                entries,
            },
            docset_dir: PathBuf::from("/out/Docs.docset"),
            archive: None,
        }
    }

    #[test]
    fn groups_are_headed_by_label_and_count() {
        let lines = format_build_summary(&report(vec![
            rendered_entry("guide", "intro"),
            rendered_entry("guide", "setup"),
        ]));
        assert_eq!(lines[0], "guide (2 documents)");
        assert_eq!(lines[1], "    001 intro → guide_intro.html (+ mind map)");
        assert_eq!(lines[2], "    002 setup → guide_setup.html (+ mind map)");
    }

    #[test]
    fn root_group_shows_placeholder_label() {
        let lines = format_build_summary(&report(vec![rendered_entry("", "readme")]));
        assert_eq!(lines[0], "(top level) (1 document)");
    }

    #[test]
    fn summary_counts_search_entries() {
        let lines = format_build_summary(&report(vec![
            rendered_entry("guide", "intro"),
            rendered_entry("", "readme"),
        ]));
        assert!(lines.iter().any(|l| l == "Indexed 5 search entries"));
    }

    #[test]
    fn archive_line_only_when_packaged() {
        let mut rep = report(vec![]);
        assert!(
            !format_build_summary(&rep)
                .iter()
                .any(|l| l.starts_with("Package:"))
        );

        rep.archive = Some(PathBuf::from("/out/Docs.docset.tgz"));
        assert!(
            format_build_summary(&rep)
                .iter()
                .any(|l| l == "Package: /out/Docs.docset.tgz")
        );
    }
}
