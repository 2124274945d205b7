//! Asset catalog imageset manifests (`Contents.json`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, Result};

/// Manifest filename inside every imageset.
pub const MANIFEST_NAME: &str = "Contents.json";

/// Top-level `Contents.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesetContents {
    pub images: Vec<ImageEntry>,
    pub info: CatalogInfo,
}

/// One resolution variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub author: String,
    pub version: u32,
}

impl Default for CatalogInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

impl ImagesetContents {
    /// Build a manifest from `(filename, scale)` pairs, in order.
    pub fn new<'a>(variants: impl IntoIterator<Item = (&'a str, u8)>) -> Self {
        let images = variants
            .into_iter()
            .map(|(filename, scale)| ImageEntry {
                filename: filename.to_string(),
                idiom: "universal".to_string(),
                scale: format!("{}x", scale),
            })
            .collect();

        Self {
            images,
            info: CatalogInfo::default(),
        }
    }

    /// Serialise as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write `Contents.json` into an imageset directory.
pub fn write_contents(dir: &Path, contents: &ImagesetContents) -> Result<()> {
    let path = dir.join(MANIFEST_NAME);

    let json = contents.to_json().map_err(|e| LaunchError::Manifest {
        path: path.clone(),
        message: e.to_string(),
    })?;

    fs::write(&path, json + "\n").map_err(|e| LaunchError::Io {
        path: path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    Ok(())
}
