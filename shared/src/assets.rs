use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::sanitize::sanitize_name;
use crate::LineupEntry;

pub const IMAGESET_EXTENSION: &str = "imageset";
pub const IMAGE_FILENAME: &str = "universal.jpg";
pub const DESCRIPTOR_FILENAME: &str = "Contents.json";

/// On-disk bundle for one artist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDirectory {
    pub slug: String,
    pub path: PathBuf,
    pub image_path: PathBuf,
    pub descriptor_path: PathBuf,
}

impl AssetDirectory {
    fn new<P>(catalog_dir: P, slug: String) -> Self
    where
        P: AsRef<Path>,
    {
        let mut path = catalog_dir.as_ref().to_path_buf();
        path.push(format!("{}.{}", slug, IMAGESET_EXTENSION));

        let mut image_path = path.clone();
        image_path.push(IMAGE_FILENAME);

        let mut descriptor_path = path.clone();
        descriptor_path.push(DESCRIPTOR_FILENAME);

        Self {
            slug,
            path,
            image_path,
            descriptor_path,
        }
    }
}

/// The container directory holding every artist imageset.
#[derive(Clone, Debug)]
pub struct AssetCatalog {
    root: PathBuf,
}

impl AssetCatalog {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Creates the catalog root if it is missing, existing content is left
    /// alone.
    pub fn ensure_exists(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| Error::CreateCatalogFailed(self.root.clone(), e))
    }

    pub fn imageset_for(&self, artist_name: &str) -> AssetDirectory {
        AssetDirectory::new(&self.root, sanitize_name(artist_name))
    }

    /// Downloads `entry.image_url` and writes the artist's imageset. The
    /// directory is created before the download, so a failed download can
    /// leave it behind empty. The descriptor is only written once the image
    /// is on disk.
    pub fn write_entry(
        &self,
        fetcher: &Fetcher,
        entry: &LineupEntry,
    ) -> Result<AssetDirectory> {
        let dir = self.imageset_for(&entry.artist_name);
        debug!("Writing '{}' to {:?}", entry.artist_name, dir.path);

        std::fs::create_dir_all(&dir.path)
            .map_err(|e| Error::CreateImagesetFailed(dir.path.clone(), e))?;

        let bytes = fetcher.download_image(&entry.image_url)?;

        std::fs::write(&dir.image_path, &bytes)
            .map_err(|e| Error::WriteImageFailed(dir.image_path.clone(), e))?;
        trace!("Wrote {} bytes to {:?}", bytes.len(), dir.image_path);

        let json = Descriptor::for_image(IMAGE_FILENAME).to_json()?;
        std::fs::write(&dir.descriptor_path, json).map_err(|e| {
            Error::WriteDescriptorFailed(dir.descriptor_path.clone(), e)
        })?;

        Ok(dir)
    }
}
