use anyhow::{Context, Result};
use clap::Parser;
use docheaders_config::Config;
use page_headers::{extract_headers, normalize_headers, ExtractOptions, HeadingNode};
use std::path::PathBuf;

/// Prints the heading tree of a markdown page as JSON.
#[derive(Parser, Debug, Clone)]
pub struct Headers {
    /// Markdown file to read.
    pub input: PathBuf,

    /// Keep the titles as rendered, without decoding entities.
    #[clap(long)]
    pub raw: bool,

    /// Heading levels to extract, overriding the config, e.g. `2,3`.
    #[clap(long, value_delimiter = ',')]
    pub levels: Vec<usize>,
}

impl Headers {
    fn collect(&self, markdown: &str, config: &Config) -> Vec<HeadingNode> {
        let options = if self.levels.is_empty() {
            config.headers.extract_options()
        } else {
            ExtractOptions::with_levels(self.levels.iter().copied())
        };

        let mut headers = extract_headers(markdown, &options);

        if !self.raw && config.headers.decode_entities {
            normalize_headers(&mut headers);
        }

        headers
    }

    pub fn run(&self, config: &Config) -> Result<()> {
        let markdown = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;

        let headers = self.collect(&markdown, config);

        tracing::debug!(input = %self.input.display(), roots = headers.len(), "Extracted headers");

        println!("{}", serde_json::to_string_pretty(&headers)?);

        Ok(())
    }
}
