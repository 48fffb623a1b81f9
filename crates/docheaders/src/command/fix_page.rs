use anyhow::{Context, Result};
use clap::Parser;
use page_headers::{extends_page, read_page, write_page};
use std::path::PathBuf;

/// Decodes the heading titles of a page data file.
#[derive(Parser, Debug, Clone)]
pub struct FixPage {
    /// Page data JSON file.
    pub input: PathBuf,

    /// Write the result here instead of overwriting the input.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

impl FixPage {
    pub fn run(&self) -> Result<()> {
        let mut page = read_page(&self.input)
            .with_context(|| format!("failed to read page data from {}", self.input.display()))?;

        extends_page(&mut page);

        let output = self.output.as_ref().unwrap_or(&self.input);
        write_page(output, &page)
            .with_context(|| format!("failed to write page data to {}", output.display()))?;

        tracing::info!(
            input = %self.input.display(),
            output = %output.display(),
            "Fixed page headers"
        );

        Ok(())
    }
}
