//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Every field has a default matching the stock site layout, so a missing
/// or partial `_config.yml` is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, used when a page sets none in its front matter
    pub title: String,

    /// Directory holding the header/footer include fragments
    pub includes_dir: String,

    /// Directory mirrored verbatim into the output tree
    pub assets_dir: String,

    /// Directory the generated site is written to
    pub output_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Jugaad Labs".to_string(),
            includes_dir: "_includes".to_string(),
            assets_dir: "assets".to_string(),
            output_dir: "_site".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
