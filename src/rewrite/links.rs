//! Link classification and rebasing for single link targets.

use crate::dialect::Dialect;
use crate::filetype::is_path_image;
use crate::path::{PARENT_DIR, get_html_path};
use regex::Regex;
use std::sync::LazyLock;

/// Optional scheme followed by a non-empty network location.
static NETLOC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//[^/?#]").unwrap());

/// Syntax a link was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkContext {
    /// `src="..."` attribute of an HTML tag
    Html,
    /// Inline Markdown or reStructuredText link
    NonHtml,
}

/// Returns true when the link has no network location.
///
/// Protocol qualified (`https://host/x`) and scheme relative
/// (`//host/x`) links are external. Everything else, including
/// `mailto:` links and `file:///` URLs with an empty host, is relative.
/// Leading control characters and spaces are ignored, as are tabs and
/// line breaks anywhere in the link.
///
/// # Examples
///
/// ```
/// use relink::is_relative;
///
/// assert!(is_relative("../docs/guide.md"));
/// assert!(!is_relative("https://example.com/guide"));
/// ```
pub fn is_relative(path: &str) -> bool {
    let cleaned: String = path
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    !NETLOC_PATTERN.is_match(&cleaned)
}

/// Rebases a relative link for a document rendered `level` directories deep.
///
/// Handles different link types:
/// - Anchor links (#section) remain unchanged
/// - External links (https://, //host) remain unchanged
/// - Inline images get `level` parent segments prepended
/// - Other links longer than `level` segments lose their first `level`
///   segments; shorter ones get `level` parent segments prepended
///
/// Page targets are mapped to their rendered `.html` name first. Empty
/// segments are dropped, so a trailing `/` does not survive rebasing.
/// Rebasing is not idempotent: feeding the result back in with the same
/// level can change it again.
///
/// # Arguments
///
/// * `link`: Link target as written in the document
/// * `level`: Depth of the document, see [`crate::link_depth`]
/// * `context`: Syntax the link was found in
/// * `dialect`: Dialect of the document, if recognized
///
/// # Returns
///
/// Rebased link target
pub fn fixlink(
    link: &str,
    level: usize,
    context: LinkContext,
    dialect: Option<Dialect>,
) -> String {
    if link.starts_with('#') || !is_relative(link) {
        return link.to_string();
    }

    let html_path = get_html_path(link, dialect);
    let segments: Vec<&str> = html_path.split('/').filter(|s| !s.is_empty()).collect();
    let parents = std::iter::repeat_n(PARENT_DIR, level);

    // Inline images live at a fixed depth from the site root
    let rebased: Vec<&str> = if is_path_image(link) && context != LinkContext::Html {
        parents.chain(segments).collect()
    } else if segments.len() > level {
        segments[level..].to_vec()
    } else {
        parents.chain(segments).collect()
    };

    rebased.join("/")
}
