//! Docset archive packaging.
//!
//! Optionally wraps the finished `{name}.docset` tree into a gzip-compressed
//! tarball (`{name}.docset.tgz`) next to it. Entries are archived relative to
//! the output directory, so extraction reproduces the `{name}.docset/...`
//! tree exactly.

use clap::ValueEnum;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supported archive formats for `--pkg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArchiveFormat {
    /// Gzip-compressed tarball.
    Tgz,
}

/// Archive `{output_dir}/{docname}.docset` into `{output_dir}/{docname}.docset.tgz`.
///
/// Returns the archive path.
pub fn package(output_dir: &Path, docname: &str) -> Result<PathBuf, PackageError> {
    let bundle_name = format!("{docname}.docset");
    let docset_dir = output_dir.join(&bundle_name);
    let archive_path = output_dir.join(format!("{bundle_name}.tgz"));

    let file = File::create(&archive_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    builder.append_dir_all(&bundle_name, &docset_dir)?;

    let encoder = builder.into_inner()?;
    encoder.finish()?;

    Ok(archive_path)
}
