use std::path::PathBuf;

use clap::Parser;
use lineup::config::{DEFAULT_ASSET_DIR, DEFAULT_MARKER, DEFAULT_PAGE_URL};
use lineup::Config;
use log::debug;

/// Downloads the artist images of a festival lineup page into an asset
/// catalog, exiting with status 1 if the page itself cannot be fetched
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Lineup page to scrape
    #[arg(short, long, default_value = DEFAULT_PAGE_URL)]
    url: String,

    /// Asset catalog directory the artist imagesets are written into
    #[arg(short, long, default_value = DEFAULT_ASSET_DIR)]
    output: PathBuf,

    /// Text that follows the artist name inside the image alt text
    #[arg(short, long, default_value = DEFAULT_MARKER)]
    marker: String,
}

impl From<Args> for Config {
    fn from(value: Args) -> Self {
        Config {
            page_url: value.url,
            asset_dir: value.output,
            marker: value.marker,
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    debug!("Args: {:#?}", args);

    let config = Config::from(args);

    match lineup::run(&config) {
        Ok(summary) => {
            println!(
                "Done: {} artist(s) written, {} skipped",
                summary.written.len(),
                summary.skipped.len()
            );
        }
        Err(e) => {
            debug!("Run aborted: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
