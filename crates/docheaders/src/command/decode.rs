use anyhow::Result;
use clap::Parser;
use page_headers::decode_entities;

/// Decodes `&#39;`, `&amp;` and `&quot;` in a title, first occurrence each.
#[derive(Parser, Debug, Clone)]
pub struct Decode {
    /// Title text to decode.
    pub text: String,
}

impl Decode {
    pub fn run(&self) -> Result<()> {
        println!("{}", decode_entities(&self.text));
        Ok(())
    }
}
