//! Document model

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::frontmatter::FrontMatter;

/// A source document: parsed front matter plus the raw Markdown body.
/// Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Document {
    /// Source file path
    pub source: PathBuf,
    /// Parsed front matter
    pub front_matter: FrontMatter,
    /// Raw Markdown body (front matter removed)
    pub body: String,
}

impl Document {
    /// Load a document from a Markdown file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let (front_matter, body) = FrontMatter::parse(&text);

        Ok(Self {
            source: path.to_path_buf(),
            front_matter,
            body: body.to_string(),
        })
    }

    /// Page title, falling back to the given site-wide default
    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.front_matter.title.as_deref().unwrap_or(default)
    }

    /// Output filename: the source stem plus `.html`, so `index.md`
    /// becomes `index.html`
    pub fn output_name(&self) -> String {
        let stem = self
            .source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");
        format!("{}.html", stem)
    }
}
