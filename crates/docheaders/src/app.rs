use crate::{command, logging};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Decode the entities of a heading title.
    #[clap(name = "decode")]
    Decode(command::decode::Decode),
    /// Print the heading tree of a markdown page as JSON.
    #[clap(name = "headers")]
    Headers(command::headers::Headers),
    /// Normalize the heading titles of a page data file.
    #[clap(name = "fix-page")]
    FixPage(command::fix_page::FixPage),
    /// Print the table of contents of a markdown page.
    #[clap(name = "toc")]
    Toc(command::toc::Toc),
}

/// Common CLI arguments.
#[derive(Parser, Debug)]
pub struct Args {
    /// Enable the logging system.
    #[clap(long)]
    pub log: Option<PathBuf>,

    /// Specify the path of the config file.
    #[clap(long)]
    pub config_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[clap(name = "docheaders", version)]
pub struct DocHeaders {
    #[clap(flatten)]
    pub args: Args,

    #[clap(subcommand)]
    pub cmd: Cmd,
}

impl DocHeaders {
    pub fn run(self) -> Result<()> {
        let (config, config_err) =
            docheaders_config::load_config_on_startup(self.args.config_file.clone());

        let log_path = logging::resolve_log_path(
            self.args.log,
            std::env::var_os(logging::LOG_PATH_ENV).map(PathBuf::from),
            &config.log,
        );
        let _guard = logging::init(log_path, &config.log)?;

        if let Some(err) = config_err {
            tracing::warn!(%err, "Failed to load the config file, using the defaults");
        } else {
            tracing::debug!(config_file = ?docheaders_config::config_file(), "Loaded config");
        }

        match self.cmd {
            Cmd::Decode(decode) => decode.run(),
            Cmd::Headers(headers) => headers.run(config),
            Cmd::FixPage(fix_page) => fix_page.run(),
            Cmd::Toc(toc) => toc.run(config),
        }
    }
}
