//! Relative link rewriting for relocated markup documents.
//!
//! This module classifies link targets and rebases the relative ones by
//! the depth of the document's source path. Links are found with per
//! dialect regular expressions; documents are never parsed into a tree.

mod links;
mod rewriter;

pub use links::{LinkContext, fixlink, is_relative};
pub use rewriter::{LinkRewriter, fix_relative_links};
