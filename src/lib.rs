//! Relative link rewriting for markup documents relocated within a site.

mod config;
mod dialect;
mod filetype;
mod path;
mod rewrite;

pub use config::Config;
pub use dialect::Dialect;
pub use filetype::is_path_image;
pub use path::{get_html_path, link_depth, split_extension};
pub use rewrite::{LinkContext, LinkRewriter, fix_relative_links, fixlink, is_relative};
