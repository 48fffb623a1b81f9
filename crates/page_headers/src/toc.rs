//! Table of contents rendering from a page's heading tree.

use crate::extract::{extract_headers, ExtractOptions};
use crate::heading::{normalize_headers, HeadingNode};

pub const TOC_START_MARKER: &str = "<!-- toc -->";
pub const TOC_END_MARKER: &str = "<!-- /toc -->";

/// Configuration for table of contents generation.
#[derive(Debug, Clone)]
pub struct TocConfig {
    /// Bullet character for list items (default: "*")
    pub bullet: String,
    /// Number of spaces per indent level (default: 4)
    pub indent: usize,
    /// Maximum heading depth to include (default: None, include all)
    pub max_depth: Option<usize>,
    /// Minimum heading depth to include (default: 1)
    pub min_depth: usize,
    /// Optional header text for the TOC (default: "## Table of Contents")
    pub header: Option<String>,
    /// If true, generate plain text without links (default: false)
    pub no_link: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            bullet: String::from("*"),
            indent: 4,
            max_depth: None,
            min_depth: 1,
            no_link: false,
            header: Some(String::from("## Table of Contents")),
        }
    }
}

impl TocConfig {
    fn format(&self, node: &HeadingNode) -> Option<String> {
        // h1 = 0, h2 = 1, ...
        let depth = node.level.saturating_sub(1);

        if depth < self.min_depth || self.max_depth.is_some_and(|d| depth > d) {
            return None;
        }

        let indent_before_bullet = " "
            .repeat(self.indent)
            .repeat(depth.saturating_sub(self.min_depth));
        let bullet = &self.bullet;
        let indent_after_bullet = " ".repeat(self.indent.saturating_sub(1));
        let title = &node.title;

        if self.no_link {
            Some(format!(
                "{indent_before_bullet}{bullet}{indent_after_bullet}{title}"
            ))
        } else {
            Some(format!(
                "{indent_before_bullet}{bullet}{indent_after_bullet}[{title}](#{})",
                node.slug
            ))
        }
    }
}

fn push_entries(headers: &[HeadingNode], config: &TocConfig, lines: &mut Vec<String>) {
    for node in headers {
        lines.extend(config.format(node));
        push_entries(&node.children, config, lines);
    }
}

/// Renders `headers` as markdown list lines, one per heading in pre-order.
///
/// Titles are used verbatim, so normalize the tree first.
pub fn render_toc(headers: &[HeadingNode], config: &TocConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(header) = &config.header {
        lines.push(header.clone());
        lines.push(String::new());
    }

    push_entries(headers, config, &mut lines);

    lines
}

/// Generates the table of contents of a markdown document.
///
/// The headings are extracted, normalized and rendered, and the result is
/// wrapped in [`TOC_START_MARKER`] and [`TOC_END_MARKER`].
pub fn generate_toc(
    markdown: &str,
    extract_options: &ExtractOptions,
    toc_config: &TocConfig,
) -> Vec<String> {
    let mut headers = extract_headers(markdown, extract_options);
    normalize_headers(&mut headers);

    let toc = render_toc(&headers, toc_config);

    let mut full_toc = Vec::with_capacity(toc.len() + 4);
    full_toc.push(TOC_START_MARKER.to_string());
    full_toc.push(Default::default());
    full_toc.extend(toc);
    full_toc.push(Default::default());
    full_toc.push(TOC_END_MARKER.to_string());

    full_toc
}
