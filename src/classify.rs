//! Classify label derivation.
//!
//! A document's *classify label* is its directory path relative to the input
//! root with path separators replaced by `_`. It groups documents on the index
//! page and prefixes every output file name, flattening the source tree into a
//! single output directory:
//!
//! ```text
//! content/intro.md            → label ""            → _intro.html
//! content/guide/intro.md      → label "guide"       → guide_intro.html
//! content/guide/api/auth.md   → label "guide_api"   → guide_api_auth.html
//! ```
//!
//! Two files in the same directory always share a label; a root-level file
//! always gets the empty label. The mapping is not injective for directory
//! names that themselves contain `_` (`a/b` and `a_b` collide) — accepted as a
//! known limitation rather than disambiguated.

use std::path::Path;

/// Derive the classify label for a directory relative to the traversal root.
///
/// Strips the root prefix and joins the remaining path components with `_`.
/// A directory outside `root` is used as-is, so callers should only pass
/// directories discovered under `root`.
pub fn classify_label(dir: &Path, root: &Path) -> String {
    let rel = dir.strip_prefix(root).unwrap_or(dir);

    let mut label = String::new();
    for component in rel.components() {
        if !label.is_empty() {
            label.push('_');
        }
        label.push_str(&component.as_os_str().to_string_lossy());
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn root_level_yields_empty_label() {
        let root = PathBuf::from("/content");
        assert_eq!(classify_label(&root, &root), "");
    }

    #[test]
    fn single_subdirectory() {
        let root = PathBuf::from("/content");
        assert_eq!(classify_label(&root.join("guide"), &root), "guide");
    }

    #[test]
    fn nested_directories_joined_with_underscore() {
        let root = PathBuf::from("/content");
        let dir = root.join("guide").join("api");
        assert_eq!(classify_label(&dir, &root), "guide_api");
    }

    #[test]
    fn same_directory_same_label() {
        let root = PathBuf::from("/content");
        let dir = root.join("notes");
        assert_eq!(classify_label(&dir, &root), classify_label(&dir, &root));
    }

    #[test]
    fn relative_root_works() {
        let root = PathBuf::from("content");
        let dir = root.join("guide");
        assert_eq!(classify_label(&dir, &root), "guide");
    }

    #[test]
    fn underscore_in_directory_name_collides() {
        // Documented limitation: "a/b" and "a_b" map to the same label.
        let root = PathBuf::from("/content");
        let nested = root.join("a").join("b");
        let flat = root.join("a_b");
        assert_eq!(classify_label(&nested, &root), classify_label(&flat, &root));
    }
}
