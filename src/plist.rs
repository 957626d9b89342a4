//! Docset descriptor generation.
//!
//! Writes `Contents/Info.plist`, the bundle descriptor a documentation
//! browser reads to register the docset. Generation is literal token
//! substitution: every `__NAME__` in the template becomes the docset's
//! display name. The template's own format is never parsed.
//!
//! Template resolution: `{run path}/templates/Info.plist` where the run path
//! is `$MDDOCSET_RUN_PATH`, defaulting to the current directory. When no such
//! file exists the stock template compiled into the binary is used, so an
//! installed binary works without a templates directory alongside it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Overrides the base path used to resolve the bundled template.
pub const RUN_PATH_ENV: &str = "MDDOCSET_RUN_PATH";

/// Placeholder replaced by the docset display name.
const NAME_TOKEN: &str = "__NAME__";

const STOCK_TEMPLATE: &str = include_str!("../templates/Info.plist");

/// File name of the descriptor, fixed by the docset layout.
pub const PLIST_FILE_NAME: &str = "Info.plist";

fn template_path() -> PathBuf {
    let base = env::var_os(RUN_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("templates").join(PLIST_FILE_NAME)
}

fn load_template() -> Result<String, PlistError> {
    match fs::read_to_string(template_path()) {
        Ok(template) => Ok(template),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(STOCK_TEMPLATE.to_string()),
        Err(e) => Err(e.into()),
    }
}

/// Write `Info.plist` into `contents_dir` for a docset named `docname`.
pub fn write(contents_dir: &Path, docname: &str) -> Result<PathBuf, PlistError> {
    let template = load_template()?;
    let rendered = template.replace(NAME_TOKEN, docname);

    let path = contents_dir.join(PLIST_FILE_NAME);
    fs::write(&path, rendered)?;
    Ok(path)
}
