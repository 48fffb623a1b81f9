use anyhow::{Context, Result};
use clap::Parser;
use docheaders_config::Config;
use page_headers::generate_toc;
use std::path::PathBuf;

/// Prints the table of contents of a markdown page.
#[derive(Parser, Debug, Clone)]
pub struct Toc {
    /// Markdown file to read.
    pub input: PathBuf,

    /// Print the titles without links.
    #[clap(long)]
    pub no_link: bool,

    /// Maximum heading depth to include (h1 = 0).
    #[clap(long)]
    pub max_depth: Option<usize>,
}

impl Toc {
    fn lines(&self, markdown: &str, config: &Config) -> Vec<String> {
        let mut toc_config = config.toc.toc_config();
        toc_config.no_link |= self.no_link;
        if self.max_depth.is_some() {
            toc_config.max_depth = self.max_depth;
        }

        generate_toc(markdown, &config.headers.extract_options(), &toc_config)
    }

    pub fn run(&self, config: &Config) -> Result<()> {
        let markdown = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;

        for line in self.lines(&markdown, config) {
            println!("{line}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_lines() {
        let toc = Toc {
            input: PathBuf::from("page.md"),
            no_link: true,
            max_depth: Some(1),
        };

        let lines = toc.lines("## Rules & filters\n\n### Skip\n", &Config::default());

        assert!(lines.contains(&"*   Rules & filters".to_string()));
        assert!(!lines.iter().any(|line| line.contains("Skip")));
    }
}
