use log::{debug, trace};
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::StatusCode;
use url::Url;

use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = ClientBuilder::new()
            .build()
            .map_err(Error::ClientBuildFailed)?;

        Ok(Self { client })
    }

    /// Fetches the lineup page markup. The status code is not inspected, a
    /// non-200 page is still handed back as markup.
    pub fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("fetch_page('{}')", url);

        let res = self
            .client
            .get(url)
            .send()
            .map_err(Error::PageRequestFailed)?;
        trace!("Page status: {}", res.status());

        res.text().map_err(Error::PageBodyReadFailed)
    }

    /// Downloads a single image, anything but `200 OK` counts as a failure.
    pub fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        debug!("download_image('{}')", url);

        let res = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::ImageRequestFailed(url.to_string(), e))?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(Error::ImageBadStatus(url.to_string(), status));
        }

        let bytes = res
            .bytes()
            .map_err(|e| Error::ImageBodyReadFailed(url.to_string(), e))?;
        trace!("Downloaded {} bytes from '{}'", bytes.len(), url);

        Ok(bytes.to_vec())
    }
}

/// Absolute `src` values are returned untouched, relative ones are joined
/// onto the page url.
pub fn resolve_image_url(page_url: &str, src: &str) -> Result<String> {
    match Url::parse(src) {
        Ok(_) => Ok(src.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(page_url)
            .and_then(|base| base.join(src))
            .map(|u| u.to_string())
            .map_err(|e| Error::InvalidImageUrl(src.to_string(), e)),
        Err(e) => Err(Error::InvalidImageUrl(src.to_string(), e)),
    }
}
