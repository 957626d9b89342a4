//! End-to-end build tests: full pipeline against real temp directories.

use flate2::read::GzDecoder;
use mddocset::markdown::RenderOptions;
use mddocset::package::ArchiveFormat;
use mddocset::pipeline::{BuildOptions, build};
use rusqlite::Connection;
use std::fs;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

fn options(input: &Path, output: &Path, docname: &str) -> BuildOptions {
    BuildOptions {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        docname: docname.to_string(),
        render: RenderOptions::default(),
        package: None,
    }
}

/// The reference input tree: one guide document and one root-level document.
fn sample_input(tmp: &TempDir) -> std::path::PathBuf {
    let input = tmp.path().join("content");
    fs::create_dir_all(input.join("guide")).unwrap();
    fs::write(
        input.join("guide/intro.md"),
        "# Guide Intro\n\n## Steps\n\n- install\n- configure\n",
    )
    .unwrap();
    fs::write(input.join("intro.md"), "# Root Intro\n").unwrap();
    input
}

fn dsidx_rows(docset_dir: &Path) -> Vec<(String, String, String)> {
    let conn = Connection::open(docset_dir.join("Contents/Resources/docSet.dsidx")).unwrap();
    let mut stmt = conn
        .prepare("SELECT name, type, path FROM searchIndex ORDER BY id")
        .unwrap();
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .unwrap();
    rows.map(|r| r.unwrap()).collect()
}

#[test]
fn docset_layout_matches_contract() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(&tmp);
    let output = tmp.path().join("out");

    let report = build(&options(&input, &output, "Docs")).unwrap();

    let docset = output.join("Docs.docset");
    assert_eq!(report.docset_dir, docset);

    assert!(docset.join("Contents/Info.plist").exists());
    assert!(docset.join("Contents/Resources/docSet.dsidx").exists());

    let docs = docset.join("Contents/Resources/Documents");
    for file in [
        "index.html",
        "guide_intro.html",
        "guide_intro_mm.html",
        "_intro.html",
        "_intro_mm.html",
    ] {
        assert!(docs.join(file).exists(), "missing {file}");
    }

    let plist = fs::read_to_string(docset.join("Contents/Info.plist")).unwrap();
    assert!(plist.contains("<string>Docs</string>"));
    assert!(!plist.contains("__NAME__"));
}

#[test]
fn search_index_has_one_guide_and_two_rows_per_document() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(&tmp);
    let output = tmp.path().join("out");

    build(&options(&input, &output, "Docs")).unwrap();

    let rows = dsidx_rows(&output.join("Docs.docset"));
    assert_eq!(rows.len(), 5);

    assert_eq!(rows[0].1, "Guide");
    assert_eq!(rows[0].2, "index.html");
    assert!(rows[1..].iter().all(|r| r.1 == "Entry"));

    let names: Vec<&str> = rows.iter().map(|r| r.0.as_str()).collect();
    assert!(names.contains(&"guide_intro"));
    assert!(names.contains(&"guide_intro_思维导图"));
    assert!(names.contains(&"_intro"));
    assert!(names.contains(&"_intro_思维导图"));
}

#[test]
fn every_entry_is_fully_rendered_after_build() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(&tmp);
    let output = tmp.path().join("out");

    let report = build(&options(&input, &output, "Docs")).unwrap();

    for entry in &report.catalog.entries {
        assert!(entry.html_path.exists(), "{:?}", entry.html_path);
        assert!(entry.mm_path.exists(), "{:?}", entry.mm_path);
        assert!(!entry.html_url_name.is_empty());
        assert!(!entry.mm_url_name.is_empty());
    }
}

#[test]
fn index_page_links_both_groups() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(&tmp);
    let output = tmp.path().join("out");

    build(&options(&input, &output, "Docs")).unwrap();

    let html = fs::read_to_string(
        output.join("Docs.docset/Contents/Resources/Documents/index.html"),
    )
    .unwrap();
    assert!(html.contains(r#"href="guide_intro.html""#));
    assert!(html.contains(r#"href="guide_intro_mm.html""#));
    assert!(html.contains(r#"href="_intro.html""#));
    assert!(html.contains(r#"href="_intro_mm.html""#));
}

#[test]
fn rebuild_is_deterministic_and_starts_clean() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(&tmp);
    let output = tmp.path().join("out");
    let opts = options(&input, &output, "Docs");

    build(&opts).unwrap();
    let first_rows = dsidx_rows(&output.join("Docs.docset"));

    // Plant a stale file; the next run must reset the workspace.
    let stale = output.join("Docs.docset/Contents/Resources/Documents/stale.html");
    fs::write(&stale, "stale").unwrap();

    build(&opts).unwrap();
    let second_rows = dsidx_rows(&output.join("Docs.docset"));

    assert_eq!(first_rows, second_rows);
    assert!(!stale.exists());
}

#[test]
fn packaging_produces_archive_with_full_bundle() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(&tmp);
    let output = tmp.path().join("out");

    let mut opts = options(&input, &output, "Docs");
    opts.package = Some(ArchiveFormat::Tgz);
    let report = build(&opts).unwrap();

    let archive = report.archive.expect("archive requested");
    assert_eq!(archive, output.join("Docs.docset.tgz"));

    let mut tar = tar::Archive::new(GzDecoder::new(File::open(&archive).unwrap()));
    let paths: Vec<String> = tar
        .entries()
        .unwrap()
        .map(|e| e.unwrap().path().unwrap().to_string_lossy().into_owned())
        .collect();

    assert!(paths.iter().all(|p| p.starts_with("Docs.docset")));
    assert!(
        paths
            .iter()
            .any(|p| p.ends_with("Documents/guide_intro.html"))
    );
    assert!(paths.iter().any(|p| p.ends_with("Contents/Info.plist")));
}

#[test]
fn no_package_request_no_archive() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(&tmp);
    let output = tmp.path().join("out");

    let report = build(&options(&input, &output, "Docs")).unwrap();

    assert!(report.archive.is_none());
    assert!(!output.join("Docs.docset.tgz").exists());
}

#[test]
fn document_name_with_quote_is_indexed() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("content");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("don't panic.md"), "# Towel\n").unwrap();
    let output = tmp.path().join("out");

    build(&options(&input, &output, "Docs")).unwrap();

    let rows = dsidx_rows(&output.join("Docs.docset"));
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().any(|r| r.0 == "_don't panic"));
}

#[test]
fn render_failure_mid_catalog_fails_the_build() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("content");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("a.md"), "# First\n").unwrap();
    fs::write(input.join("b.md"), [0xFFu8, 0xFE, 0x00]).unwrap();
    fs::write(input.join("c.md"), "# Third\n").unwrap();
    let output = tmp.path().join("out");

    let result = build(&options(&input, &output, "Docs"));

    assert!(result.is_err());
    // No search index for a failed build.
    assert!(
        !output
            .join("Docs.docset/Contents/Resources/docSet.dsidx")
            .exists()
    );
}
