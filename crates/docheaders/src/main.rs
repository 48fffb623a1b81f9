mod app;
mod command;
mod logging;

use app::DocHeaders;
use clap::Parser;

fn main() {
    let docheaders = DocHeaders::parse();

    if let Err(e) = docheaders.run() {
        eprintln!("error: {e:?}");
        std::process::exit(1);
    }
}
