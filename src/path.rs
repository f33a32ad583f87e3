//! Path utilities for link rebasing

use crate::dialect::Dialect;

/// Parent directory segment used when climbing out of a nested page.
pub const PARENT_DIR: &str = "..";

/// Counts parent directory segments in a document source path.
///
/// The count is used as the depth of the rendered page: every `..` in the
/// source path is one level the output sits away from the site root.
/// Platform separators are normalized to `/` before splitting.
///
/// # Arguments
///
/// * `source_path`: Path of the document as handed to the rewriter
///
/// # Returns
///
/// Number of `..` segments found in the path
pub fn link_depth(source_path: &str) -> usize {
    source_path
        .replace(std::path::MAIN_SEPARATOR, "/")
        .split('/')
        .filter(|segment| *segment == PARENT_DIR)
        .count()
}

/// Splits a path into stem and extension.
///
/// Only the final path component is considered. The extension starts at
/// the last dot of that component and keeps the dot. Leading dots do not
/// start an extension, so `.bashrc` and `dir/` have none.
///
/// # Arguments
///
/// * `path`: Path or link target to split
///
/// # Returns
///
/// Tuple of stem and extension (empty when absent)
pub fn split_extension(path: &str) -> (&str, &str) {
    let name_start = path.rfind('/').map_or(0, |idx| idx + 1);
    let name = &path[name_start..];

    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => path.split_at(name_start + dot),
        _ => (path, ""),
    }
}

/// Maps a link target to the page it will point at in the generated site.
///
/// Markdown and reStructuredText sources are rendered to HTML, so their
/// extension is swapped for `.html`. Markdown documents may also link to
/// extensionless pages, which get `.html` appended. Directory links ending
/// in `/` and every other path stay as they are.
///
/// # Arguments
///
/// * `path`: Link target
/// * `dialect`: Dialect of the document containing the link
///
/// # Returns
///
/// Link target pointing at the rendered page
pub fn get_html_path(path: &str, dialect: Option<Dialect>) -> String {
    let (stem, ext) = split_extension(path);

    let extensionless_page =
        dialect == Some(Dialect::Markdown) && ext.is_empty() && !stem.ends_with('/');

    if matches!(ext, ".md" | ".rst") || extensionless_page {
        format!("{stem}.html")
    } else {
        path.to_string()
    }
}
