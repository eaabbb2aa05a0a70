use std::fmt;
use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum Error {
    ClientBuildFailed(reqwest::Error),
    CreateCatalogFailed(PathBuf, std::io::Error),
    PageRequestFailed(reqwest::Error),
    PageBodyReadFailed(reqwest::Error),

    InvalidImageUrl(String, url::ParseError),
    ImageRequestFailed(String, reqwest::Error),
    ImageBadStatus(String, StatusCode),
    ImageBodyReadFailed(String, reqwest::Error),
    CreateImagesetFailed(PathBuf, std::io::Error),
    WriteImageFailed(PathBuf, std::io::Error),
    WriteDescriptorFailed(PathBuf, std::io::Error),
    SerializeDescriptorFailed(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Page-level failures end the run, everything else only skips the
    /// artist it happened on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ClientBuildFailed(_)
                | Error::CreateCatalogFailed(..)
                | Error::PageRequestFailed(_)
                | Error::PageBodyReadFailed(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ClientBuildFailed(e) => {
                write!(f, "failed to build http client: {}", e)
            }
            Error::CreateCatalogFailed(path, e) => {
                write!(f, "failed to create asset catalog {:?}: {}", path, e)
            }
            Error::PageRequestFailed(e) => {
                write!(f, "failed to fetch lineup page: {}", e)
            }
            Error::PageBodyReadFailed(e) => {
                write!(f, "failed to read lineup page body: {}", e)
            }
            Error::InvalidImageUrl(url, e) => {
                write!(f, "invalid image url '{}': {}", url, e)
            }
            Error::ImageRequestFailed(url, e) => {
                write!(f, "error downloading {}: {}", url, e)
            }
            Error::ImageBadStatus(url, status) => {
                write!(f, "error downloading {}: status {}", url, status)
            }
            Error::ImageBodyReadFailed(url, e) => {
                write!(f, "error reading body of {}: {}", url, e)
            }
            Error::CreateImagesetFailed(path, e) => {
                write!(f, "failed to create imageset {:?}: {}", path, e)
            }
            Error::WriteImageFailed(path, e) => {
                write!(f, "failed to write image {:?}: {}", path, e)
            }
            Error::WriteDescriptorFailed(path, e) => {
                write!(f, "failed to write descriptor {:?}: {}", path, e)
            }
            Error::SerializeDescriptorFailed(e) => {
                write!(f, "failed to serialize descriptor: {}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ClientBuildFailed(e)
            | Error::PageRequestFailed(e)
            | Error::PageBodyReadFailed(e)
            | Error::ImageRequestFailed(_, e)
            | Error::ImageBodyReadFailed(_, e) => Some(e),
            Error::CreateCatalogFailed(_, e)
            | Error::CreateImagesetFailed(_, e)
            | Error::WriteImageFailed(_, e)
            | Error::WriteDescriptorFailed(_, e) => Some(e),
            Error::InvalidImageUrl(_, e) => Some(e),
            Error::SerializeDescriptorFailed(e) => Some(e),
            Error::ImageBadStatus(..) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_page_level_errors_are_fatal() {
        let io = || std::io::Error::new(std::io::ErrorKind::Other, "nope");

        assert!(Error::CreateCatalogFailed(PathBuf::from("a"), io()).is_fatal());
        assert!(!Error::ImageBadStatus(
            "http://x/a.jpg".to_string(),
            StatusCode::NOT_FOUND
        )
        .is_fatal());
        assert!(!Error::WriteImageFailed(PathBuf::from("a"), io()).is_fatal());
        assert!(!Error::WriteDescriptorFailed(PathBuf::from("a"), io())
            .is_fatal());
    }

    #[test]
    fn bad_status_names_the_url() {
        let e = Error::ImageBadStatus(
            "http://x/a.jpg".to_string(),
            StatusCode::NOT_FOUND,
        );
        let msg = e.to_string();
        assert!(msg.contains("http://x/a.jpg"));
        assert!(msg.contains("404"));
    }
}
