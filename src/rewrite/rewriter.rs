//! Document level link rewriting.

use super::links::{LinkContext, fixlink};
use crate::dialect::{Dialect, LinkMatch};
use crate::path::link_depth;
use regex::Captures;

/// Rewrites relative links of one document for its place in the site.
///
/// Holds the dialect and depth derived from the document's source path.
/// Rewriting is a pure function of the content, so one rewriter can be
/// shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRewriter {
    dialect: Option<Dialect>,
    level: usize,
}

impl LinkRewriter {
    /// Creates link rewriter for a document source path.
    ///
    /// # Arguments
    ///
    /// * `source_path`: Path the document was read from; its extension
    ///   selects the dialect and its `..` segments set the depth
    pub fn new(source_path: &str) -> Self {
        Self {
            dialect: Dialect::from_path(source_path),
            level: link_depth(source_path),
        }
    }

    /// Dialect detected from the source path.
    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    /// Depth detected from the source path.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Rewrites relative links in document content.
    ///
    /// HTML `src` attributes are rewritten for every document. Markdown and
    /// reStructuredText documents then get their inline links rewritten;
    /// those replacements are padded so they never shrink, which keeps
    /// columns of fixed width tables aligned.
    ///
    /// # Arguments
    ///
    /// * `content`: Document text
    ///
    /// # Returns
    ///
    /// Document text with rebased links
    pub fn rewrite(&self, content: &str) -> String {
        tracing::debug!(
            dialect = self.dialect.map(|d| d.tag()),
            level = self.level,
            "Rewriting relative links"
        );

        let html = Dialect::Html.template();
        let content = html
            .pattern
            .replace_all(content, |caps: &Captures<'_>| {
                let found = LinkMatch::from_captures(caps);
                let link = self.fix(found.link, LinkContext::Html);
                html.render(&LinkMatch {
                    link: &link,
                    ..found
                })
            })
            .into_owned();

        match self.dialect {
            Some(dialect) if dialect.has_inline_links() => self.rewrite_inline(&content, dialect),
            _ => content,
        }
    }

    fn rewrite_inline(&self, content: &str, dialect: Dialect) -> String {
        let template = dialect.template();

        template
            .pattern
            .replace_all(content, |caps: &Captures<'_>| {
                let found = LinkMatch::from_captures(caps);
                let link = self.fix(found.link, LinkContext::NonHtml);
                let fixed = LinkMatch {
                    link: &link,
                    ..found
                };

                let output = template.render(&fixed);
                let original_len = found.span.chars().count();
                let output_len = output.chars().count();
                if output_len >= original_len {
                    return output;
                }

                // Keep replacement width so table cells stay aligned
                let title = format!(
                    "{}{}",
                    found.title.unwrap_or_default(),
                    " ".repeat(original_len - output_len)
                );
                template.render(&LinkMatch {
                    title: Some(&title),
                    ..fixed
                })
            })
            .into_owned()
    }

    fn fix(&self, link: &str, context: LinkContext) -> String {
        let fixed = fixlink(link, self.level, context, self.dialect);
        if fixed != link {
            tracing::trace!(from = link, to = %fixed, ?context, "Rebased link");
        }
        fixed
    }
}

/// Rewrites relative links in `content` read from `source_path`.
///
/// Shorthand for [`LinkRewriter::new`] followed by
/// [`LinkRewriter::rewrite`].
///
/// # Examples
///
/// ```
/// use relink::fix_relative_links;
///
/// let content = "[Guide](guide.md)";
/// assert_eq!(
///     fix_relative_links(content, "../../docs/page.md"),
///     "[Guide](../../guide.html)"
/// );
/// ```
pub fn fix_relative_links(content: &str, source_path: &str) -> String {
    LinkRewriter::new(source_path).rewrite(content)
}
