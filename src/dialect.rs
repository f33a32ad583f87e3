//! Markup dialects and their link syntax.
//!
//! Every dialect owns a [`LinkTemplate`]: a lazily compiled pattern that
//! finds link syntax and a render function that writes it back.

use crate::path::split_extension;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Markup syntax family of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Markdown (`.md`), links written as `[title](link)`
    Markdown,
    /// reStructuredText (`.rst`), links written as `` `title<link>` ``
    RestructuredText,
    /// HTML fragment (`.html`), only `src="..."` attributes are rewritten
    Html,
}

impl Dialect {
    /// Resolves dialect from an extension without its leading dot.
    ///
    /// Matching is case sensitive; unknown extensions yield `None`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "md" => Some(Self::Markdown),
            "rst" => Some(Self::RestructuredText),
            "html" => Some(Self::Html),
            _ => None,
        }
    }

    /// Resolves dialect from a document source path.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::Dialect;
    ///
    /// assert_eq!(Dialect::from_path("docs/guide.md"), Some(Dialect::Markdown));
    /// assert_eq!(Dialect::from_path("docs/notes.txt"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        let (_, ext) = split_extension(path);
        Self::from_extension(ext.trim_start_matches('.'))
    }

    /// Extension tag for this dialect.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::RestructuredText => "rst",
            Self::Html => "html",
        }
    }

    /// Whether the dialect has inline link syntax beyond `src` attributes.
    pub fn has_inline_links(&self) -> bool {
        matches!(self, Self::Markdown | Self::RestructuredText)
    }

    pub(crate) fn template(&self) -> &'static LinkTemplate {
        match self {
            Self::Markdown => &MARKDOWN,
            Self::RestructuredText => &RESTRUCTURED_TEXT,
            Self::Html => &HTML,
        }
    }
}

/// One link found by a dialect pattern.
///
/// `title` is absent for HTML matches; `start` and `end` are empty for
/// everything but HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LinkMatch<'a> {
    pub span: &'a str,
    pub title: Option<&'a str>,
    pub link: &'a str,
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> LinkMatch<'a> {
    pub(crate) fn from_captures(caps: &Captures<'a>) -> Self {
        let group = |name: &str| caps.name(name).map(|m| m.as_str());

        Self {
            span: caps.get(0).map_or("", |m| m.as_str()),
            title: group("title"),
            link: group("link").unwrap_or_default(),
            start: group("start").unwrap_or_default(),
            end: group("end").unwrap_or_default(),
        }
    }
}

/// Pattern and renderer pair for one dialect.
pub(crate) struct LinkTemplate {
    pub pattern: LazyLock<Regex>,
    render: fn(&LinkMatch<'_>) -> String,
}

impl LinkTemplate {
    pub(crate) fn render(&self, link: &LinkMatch<'_>) -> String {
        (self.render)(link)
    }
}

static MARKDOWN: LinkTemplate = LinkTemplate {
    pattern: LazyLock::new(|| {
        Regex::new(r"\[(?P<title>[^\[\]]*?)\]\((?P<link>[^)(]*?)\)").unwrap()
    }),
    render: render_markdown,
};

static RESTRUCTURED_TEXT: LinkTemplate = LinkTemplate {
    pattern: LazyLock::new(|| Regex::new(r"`(?P<title>[^`]*?)<(?P<link>[^`\n]*?)>`").unwrap()),
    render: render_rst,
};

static HTML: LinkTemplate = LinkTemplate {
    pattern: LazyLock::new(|| {
        Regex::new(r#"<(?P<start>[^><]*?)src\s*=\s*"(?P<link>.*?)"(?P<end>[^<]*?)>"#).unwrap()
    }),
    render: render_html,
};

fn render_markdown(m: &LinkMatch<'_>) -> String {
    format!("[{}]({})", m.title.unwrap_or_default(), m.link)
}

fn render_rst(m: &LinkMatch<'_>) -> String {
    format!("`{}<{}>`", m.title.unwrap_or_default(), m.link)
}

fn render_html(m: &LinkMatch<'_>) -> String {
    format!("<{}src=\"{}\"{}>", m.start, m.link, m.end)
}
