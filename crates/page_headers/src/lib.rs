//! Page header handling for the documentation site.
//!
//! The markdown renderer leaves HTML entities in heading titles. This crate
//! extracts the heading tree of a page, decodes those titles in place before
//! they are used in navigation or a table of contents, and renders the TOC.
//!
//! # Modules
//!
//! - [`entities`] - Decoding of the entities found in heading titles
//! - [`heading`] - Heading tree and its in-place normalization
//! - [`extract`] - Heading tree extraction from markdown
//! - [`page`] - Page data records and the page extension hook
//! - [`toc`] - Table of contents rendering

pub mod entities;
pub mod extract;
pub mod heading;
pub mod page;
pub mod toc;

// Re-export commonly used types at crate root
pub use entities::decode_entities;
pub use extract::{extract_headers, slugify, ExtractOptions};
pub use heading::{normalize, normalize_headers, HeadingNode};
pub use page::{extends_page, read_page, write_page, PageData, PageError};
pub use toc::{generate_toc, render_toc, TocConfig};
