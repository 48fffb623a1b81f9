//! Extraction of a page's heading tree from its markdown source.
//!
//! Titles are taken from the rendered HTML of each heading with the tags
//! stripped, so they carry the same escaping a rendered page does: `&`, `<`
//! and `>` come out as `&amp;`, `&lt;` and `&gt;`, while quotes are left
//! as they are. Run [`normalize_headers`](crate::normalize_headers) over the
//! result before showing them anywhere; it only turns `&amp;` back, so
//! `&lt;` and `&gt;` stay escaped.

use crate::heading::HeadingNode;
use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

/// Options for [`extract_headers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Heading levels to keep (1 for `#`, 2 for `##`, ...).
    pub levels: Vec<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { levels: vec![2, 3] }
    }
}

impl ExtractOptions {
    pub fn with_levels(levels: impl IntoIterator<Item = usize>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }

    fn keeps(&self, level: usize) -> bool {
        self.levels.contains(&level)
    }
}

/// Converts heading text to a URL-safe slug following GitHub's convention.
///
/// # Example
///
/// ```
/// use page_headers::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("API Reference (v2)"), "api-reference-v2");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '_' {
                Some(c)
            } else if c == ' ' || c == '-' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn strip_tags(html: &str) -> String {
    static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
    TAG.replace_all(html, "").trim().to_string()
}

/// Heading being collected between its start and end events.
struct OpenHeading<'a> {
    level: usize,
    id: Option<String>,
    inline: Vec<Event<'a>>,
    text: String,
}

impl OpenHeading<'_> {
    fn finish(self) -> HeadingNode {
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, self.inline.into_iter());

        let slug = self.id.unwrap_or_else(|| slugify(&self.text));
        HeadingNode {
            level: self.level,
            title: strip_tags(&html),
            link: format!("#{slug}"),
            slug,
            children: Vec::new(),
            extra: Default::default(),
        }
    }
}

/// Extracts the headings of `markdown` whose level is in `options.levels`.
///
/// A heading is nested under the closest preceding heading of a smaller
/// level, otherwise it is a root. Titles are left HTML-escaped.
pub fn extract_headers(markdown: &str, options: &ExtractOptions) -> Vec<HeadingNode> {
    let mut pulldown_options = Options::empty();
    pulldown_options.insert(Options::ENABLE_TABLES);
    pulldown_options.insert(Options::ENABLE_STRIKETHROUGH);
    pulldown_options.insert(Options::ENABLE_TASKLISTS);
    pulldown_options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let mut flat = Vec::new();
    let mut open: Option<OpenHeading> = None;

    for event in Parser::new_ext(markdown, pulldown_options) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                let level = level as usize;
                if options.keeps(level) {
                    open = Some(OpenHeading {
                        level,
                        id: id.map(|id| id.into_string()),
                        inline: Vec::new(),
                        text: String::new(),
                    });
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = open.take() {
                    flat.push(heading.finish());
                }
            }
            event => {
                if let Some(heading) = open.as_mut() {
                    if let Event::Text(text) | Event::Code(text) = &event {
                        heading.text.push_str(text);
                    }
                    heading.inline.push(event);
                }
            }
        }
    }

    tracing::trace!(count = flat.len(), "Extracted headings");

    nest(flat)
}

/// Builds the heading tree from headings in document order.
fn nest(flat: Vec<HeadingNode>) -> Vec<HeadingNode> {
    fn close_top(stack: &mut Vec<HeadingNode>, roots: &mut Vec<HeadingNode>) {
        if let Some(done) = stack.pop() {
            match stack.last_mut() {
                Some(parent) => parent.children.push(done),
                None => roots.push(done),
            }
        }
    }

    let mut roots = Vec::new();
    let mut stack: Vec<HeadingNode> = Vec::new();

    for heading in flat {
        while stack.last().is_some_and(|top| top.level >= heading.level) {
            close_top(&mut stack, &mut roots);
        }
        stack.push(heading);
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(headers: &[HeadingNode]) -> Vec<&str> {
        headers.iter().map(|h| h.title.as_str()).collect()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Test-123"), "test-123");
        assert_eq!(slugify("foo_bar"), "foo_bar");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("Tom & Jerry"), "tom-jerry");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("Use <code>serve</code> "), "Use serve");
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn test_levels_and_nesting() {
        let markdown = "\
# Calendar API

## Installation

### From source

### Docker

## Usage

#### Ignored depth

### Rules
";
        let headers = extract_headers(markdown, &ExtractOptions::default());

        assert_eq!(titles(&headers), ["Installation", "Usage"]);
        assert_eq!(titles(&headers[0].children), ["From source", "Docker"]);
        assert_eq!(titles(&headers[1].children), ["Rules"]);
        assert_eq!(headers[0].level, 2);
        assert_eq!(headers[0].children[1].level, 3);
    }

    #[test]
    fn test_sub_heading_without_parent_is_root() {
        let headers = extract_headers("### Orphan\n\n## Parent\n", &ExtractOptions::default());
        assert_eq!(titles(&headers), ["Orphan", "Parent"]);
        assert!(headers[0].children.is_empty());
    }

    #[test]
    fn test_custom_levels() {
        let markdown = "# One\n\n## Two\n\n### Three\n";
        let headers = extract_headers(markdown, &ExtractOptions::with_levels([1, 2, 3]));
        assert_eq!(titles(&headers), ["One"]);
        assert_eq!(titles(&headers[0].children), ["Two"]);
        assert_eq!(titles(&headers[0].children[0].children), ["Three"]);
    }

    #[test]
    fn test_title_is_escaped_and_slug_is_plain() {
        let headers = extract_headers("## Tom & Jerry\n", &ExtractOptions::default());
        assert_eq!(headers[0].title, "Tom &amp; Jerry");
        assert_eq!(headers[0].slug, "tom-jerry");
        assert_eq!(headers[0].link, "#tom-jerry");
    }

    #[test]
    fn test_title_escaping_seen_by_normalize() {
        let mut headers = extract_headers(
            "## Don't say \"hi\" & <b>x</b>\n\n## Compare &lt;a&gt; & b\n",
            &ExtractOptions::default(),
        );

        assert_eq!(
            titles(&headers),
            ["Don't say \"hi\" &amp; x", "Compare &lt;a&gt; &amp; b"]
        );

        crate::normalize_headers(&mut headers);

        assert_eq!(
            titles(&headers),
            ["Don't say \"hi\" & x", "Compare &lt;a&gt; & b"]
        );
    }

    #[test]
    fn test_inline_markup_is_stripped() {
        let headers = extract_headers("## Run `serve` *now*\n", &ExtractOptions::default());
        assert_eq!(headers[0].title, "Run serve now");
        assert_eq!(headers[0].slug, "run-serve-now");
    }

    #[test]
    fn test_explicit_heading_id() {
        let headers = extract_headers("## Setup {#getting-set-up}\n", &ExtractOptions::default());
        assert_eq!(headers[0].title, "Setup");
        assert_eq!(headers[0].slug, "getting-set-up");
        assert_eq!(headers[0].link, "#getting-set-up");
    }

    #[test]
    fn test_code_fences_are_not_headings() {
        let markdown = "## Real\n\n```sh\n## not a heading\n```\n";
        let headers = extract_headers(markdown, &ExtractOptions::default());
        assert_eq!(titles(&headers), ["Real"]);
    }
}
