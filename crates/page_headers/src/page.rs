//! Page data records as the documentation site keeps them, one JSON object per page.

use crate::heading::{normalize_headers, HeadingNode};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Error type for page data operations.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// I/O error while reading or writing a page file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed page JSON.
    #[error("Invalid page data: {0}")]
    Json(#[from] serde_json::Error),
}

/// The data of one rendered page.
///
/// Fields this crate does not use (frontmatter, git info, ...) are kept in
/// `extra` and written back unchanged. An empty `path` or `title` is not
/// written; `headers` always is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Top-level headings of the page, empty when the page has none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub headers: Vec<HeadingNode>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<HeadingNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<HeadingNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PageData {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of headings on the page, nested ones included.
    pub fn header_count(&self) -> usize {
        self.headers.iter().map(HeadingNode::count).sum()
    }
}

pub fn read_page(path: impl AsRef<Path>) -> Result<PageData, PageError> {
    let contents = std::fs::read_to_string(path)?;
    PageData::from_json(&contents)
}

pub fn write_page(path: impl AsRef<Path>, page: &PageData) -> Result<(), PageError> {
    let mut json = page.to_json_pretty()?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

/// Page extension hook: decodes the titles of all headings of `page`.
pub fn extends_page(page: &mut PageData) {
    normalize_headers(&mut page.headers);

    tracing::debug!(
        path = %page.path,
        headers = page.header_count(),
        "Normalized page headers"
    );
}
