use std::path::PathBuf;

pub const DEFAULT_PAGE_URL: &str = "https://forestfest.ie/main-lineup/";
pub const DEFAULT_ASSET_DIR: &str =
    "Forest Fest/Assets.xcassets/Artists.spriteatlas";
pub const DEFAULT_MARKER: &str = "Forest Fest";

#[derive(Clone, Debug)]
pub struct Config {
    /// Lineup page to scrape
    pub page_url: String,
    /// Catalog directory the imagesets are written into
    pub asset_dir: PathBuf,
    /// Text every artist image alt carries right after the artist name
    pub marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}
