//! mdsite: a minimal static site builder
//!
//! This crate turns a flat directory of Markdown files plus two optional
//! HTML include fragments into a static website, mirroring an assets
//! directory into the output tree.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main site handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory (the site root holding the Markdown sources)
    pub base_dir: std::path::PathBuf,
    /// Includes directory (header/footer fragments)
    pub includes_dir: std::path::PathBuf,
    /// Assets directory (mirrored into the output tree)
    pub assets_dir: std::path::PathBuf,
    /// Output directory
    pub output_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let includes_dir = base_dir.join(&config.includes_dir);
        let assets_dir = base_dir.join(&config.assets_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Ok(Self {
            config,
            base_dir,
            includes_dir,
            assets_dir,
            output_dir,
        })
    }

    /// Build the static site
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
