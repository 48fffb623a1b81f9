//! Heading tree of a page and its in-place title normalization.

use crate::entities::decode_entities;
use serde::{Deserialize, Serialize};

/// One entry in the outline of a page's section titles.
///
/// Keys the site generator stores on a header that are not modelled here are
/// kept in `extra`, and `level`, `slug` and `link` are only written when set,
/// so a node read from page data is written back as it came in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingNode {
    /// Heading level (1 for `#`, 2 for `##`, ...), 0 when unknown.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub level: usize,
    /// Display text, possibly still HTML-escaped.
    pub title: String,
    /// Anchor id of the heading.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    /// Link to the heading within its page, usually `#{slug}`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    /// Nested sub-headings in document order.
    #[serde(default)]
    pub children: Vec<HeadingNode>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn is_zero(level: &usize) -> bool {
    *level == 0
}

impl HeadingNode {
    /// Creates a node with no level, anchor or children.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Replaces the sub-headings of this node.
    pub fn with_children(mut self, children: Vec<HeadingNode>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}

/// Decodes the title of `node` and then of every descendant, pre-order.
///
/// Only `title` fields are touched; the shape of the tree is left as is.
pub fn normalize(node: &mut HeadingNode) {
    node.title = decode_entities(&node.title);
    for child in node.children.iter_mut() {
        normalize(child);
    }
}

/// Normalizes every root of a page's header list in order.
pub fn normalize_headers(headers: &mut [HeadingNode]) {
    headers.iter_mut().for_each(normalize);
}
