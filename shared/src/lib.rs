use log::{debug, error, info};

pub use assets::{AssetCatalog, AssetDirectory};
pub use config::Config;
pub use descriptor::Descriptor;
pub use error::{Error, Result};
pub use extract::{LineupEntry, LineupPage};
pub use fetch::Fetcher;
pub use sanitize::sanitize_name;

pub mod assets;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod sanitize;

#[derive(Debug)]
pub struct SkippedEntry {
    pub entry: LineupEntry,
    pub reason: Error,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<AssetDirectory>,
    pub skipped: Vec<SkippedEntry>,
}

/// Scrapes the lineup page and writes one imageset per artist.
///
/// Only page level failures are returned as `Err`. A single artist that
/// fails is logged, recorded in the summary and the run moves on.
pub fn run(config: &Config) -> Result<RunSummary> {
    let catalog = AssetCatalog::new(config.asset_dir.clone());
    catalog.ensure_exists()?;

    let fetcher = Fetcher::new()?;
    let markup = fetcher.fetch_page(&config.page_url)?;

    let page = LineupPage::parse(&markup, &config.marker);

    let mut summary = RunSummary::default();
    for entry in page.entries() {
        let entry = match fetch::resolve_image_url(
            &config.page_url,
            &entry.image_url,
        ) {
            Ok(image_url) => LineupEntry { image_url, ..entry },
            Err(e) => {
                error!("{} ({})", e, entry.artist_name);
                summary.skipped.push(SkippedEntry { entry, reason: e });
                continue;
            }
        };

        match catalog.write_entry(&fetcher, &entry) {
            Ok(dir) => {
                println!("Downloaded image for {}", entry.artist_name);
                debug!("'{}' -> {:?}", entry.artist_name, dir.path);
                summary.written.push(dir);
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                error!("{} ({})", e, entry.artist_name);
                summary.skipped.push(SkippedEntry { entry, reason: e });
            }
        }
    }

    info!(
        "{} imageset(s) written, {} skipped",
        summary.written.len(),
        summary.skipped.len()
    );

    Ok(summary)
}
