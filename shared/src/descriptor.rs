use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEVICE_CLASS: &str = "universal";
pub const DISPLAY_SCALE: &str = "1x";
pub const AUTHOR_TAG: &str = "xcode";
pub const FORMAT_VERSION: usize = 1;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DescriptorImage {
    pub filename: String,
    #[serde(rename = "idiom")]
    pub device_class: String,
    #[serde(rename = "scale")]
    pub display_scale: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DescriptorInfo {
    pub author: String,
    pub version: usize,
}

/// `Contents.json` of a single imageset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub images: Vec<DescriptorImage>,
    pub info: DescriptorInfo,
}

impl Descriptor {
    pub fn for_image(filename: &str) -> Self {
        Self {
            images: vec![DescriptorImage {
                filename: filename.to_string(),
                device_class: DEVICE_CLASS.to_string(),
                display_scale: DISPLAY_SCALE.to_string(),
            }],
            info: DescriptorInfo {
                author: AUTHOR_TAG.to_string(),
                version: FORMAT_VERSION,
            },
        }
    }

    /// Two space indented json.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(Error::SerializeDescriptorFailed)
    }
}
