//! Generator module - the one-shot build pipeline
//!
//! The pipeline is linear and single-threaded: mirror the assets
//! directory, then render each root-level Markdown file independently.
//! Any read/write/copy failure aborts the whole build.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::{Document, MarkdownRenderer};
use crate::templates::{render_page, Fragments};
use crate::Site;

/// Static site generator
pub struct Generator<'a> {
    site: &'a Site,
    renderer: &'a MarkdownRenderer,
    fragments: Fragments,
}

impl<'a> Generator<'a> {
    /// Create a new generator, loading the include fragments once
    pub fn new(site: &'a Site, renderer: &'a MarkdownRenderer) -> Result<Self> {
        let fragments = Fragments::load(&site.includes_dir)?;

        Ok(Self {
            site,
            renderer,
            fragments,
        })
    }

    /// Generate the entire site. Returns the number of pages written.
    pub fn generate(&self) -> Result<usize> {
        fs::create_dir_all(&self.site.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.site.output_dir.display()
            )
        })?;

        self.copy_assets()?;

        let mut pages = 0;
        for entry in WalkDir::new(&self.site.base_dir).max_depth(1) {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file() && is_markdown_file(path) {
                self.generate_page(path)?;
                pages += 1;
            }
        }

        Ok(pages)
    }

    /// Render a single Markdown file and write it to the output directory
    fn generate_page(&self, path: &Path) -> Result<()> {
        let doc = Document::load(path)?;
        let content = self.renderer.render(&doc.body)?;
        let title = doc.title_or(&self.site.config.title);
        let page = render_page(title, &content, &self.fragments);

        let output_path = self.site.output_dir.join(doc.output_name());
        fs::write(&output_path, page)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        tracing::info!("Wrote {:?}", output_path);

        Ok(())
    }

    /// Mirror the assets directory into the output tree.
    ///
    /// An existing assets directory in the output tree is removed first so
    /// no stale files survive the copy.
    fn copy_assets(&self) -> Result<()> {
        let source = &self.site.assets_dir;
        if !source.exists() {
            return Ok(());
        }

        let dest_root = self.site.output_dir.join(&self.site.config.assets_dir);
        if dest_root.exists() {
            fs::remove_dir_all(&dest_root).with_context(|| {
                format!("failed to remove stale assets at {}", dest_root.display())
            })?;
        }

        for entry in WalkDir::new(source).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            let relative = path.strip_prefix(source)?;
            let dest = dest_root.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest)?;
            } else {
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)
                    .with_context(|| format!("failed to copy asset {}", path.display()))?;
            }
        }

        tracing::debug!("Copied assets into {:?}", dest_root);
        Ok(())
    }
}

/// Check if a file is a markdown source
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site_in(dir: &TempDir) -> Site {
        Site::new(dir.path()).unwrap()
    }

    fn build(site: &Site) -> usize {
        let renderer = MarkdownRenderer::new().unwrap();
        let generator = Generator::new(site, &renderer).unwrap();
        generator.generate().unwrap()
    }

    #[test]
    fn test_end_to_end_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("_includes")).unwrap();
        fs::write(
            dir.path().join("_includes/header.html"),
            "<header>site header</header>",
        )
        .unwrap();
        fs::write(
            dir.path().join("_includes/footer.html"),
            "<footer>site footer</footer>",
        )
        .unwrap();
        fs::write(
            dir.path().join("index.md"),
            "---\ntitle: \"Home\"\n---\n\n# Hi\n",
        )
        .unwrap();

        let site = site_in(&dir);
        let pages = build(&site);
        assert_eq!(pages, 1);

        let html = fs::read_to_string(site.output_dir.join("index.html")).unwrap();
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains("<header>site header</header>"));
        assert!(html.contains("<footer>site footer</footer>"));

        // The rendered heading sits inside <main>, between the fragments
        let main_start = html.find("<main").unwrap();
        let main_end = html.find("</main>").unwrap();
        let main = &html[main_start..main_end];
        assert!(main.contains("<h1>Hi</h1>"));
        assert!(html.find("<header>").unwrap() < main_start);
        assert!(html.find("<footer>").unwrap() > main_end);
    }

    #[test]
    fn test_index_md_maps_to_index_html() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.md"), "# Home\n").unwrap();

        let site = site_in(&dir);
        build(&site);

        assert!(site.output_dir.join("index.html").exists());
        assert!(!site.output_dir.join("index.md.html").exists());
    }

    #[test]
    fn test_every_root_markdown_file_produces_one_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.md"), "# Home\n").unwrap();
        fs::write(dir.path().join("about.md"), "# About\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not markdown\n").unwrap();

        // Markdown in subdirectories is not scanned
        fs::create_dir(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("drafts/wip.md"), "# WIP\n").unwrap();

        let site = site_in(&dir);
        let pages = build(&site);
        assert_eq!(pages, 2);

        assert!(site.output_dir.join("index.html").exists());
        assert!(site.output_dir.join("about.html").exists());
        assert!(!site.output_dir.join("wip.html").exists());
        assert!(!site.output_dir.join("notes.html").exists());
    }

    #[test]
    fn test_missing_title_uses_site_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.md"), "no front matter\n").unwrap();

        let site = site_in(&dir);
        build(&site);

        let html = fs::read_to_string(site.output_dir.join("index.html")).unwrap();
        assert!(html.contains("<title>Jugaad Labs</title>"));
    }

    #[test]
    fn test_build_without_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.md"), "# Home\n").unwrap();

        let site = site_in(&dir);
        build(&site);

        assert!(!site.output_dir.join("assets").exists());
    }

    #[test]
    fn test_assets_mirrored_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets/css")).unwrap();
        fs::write(dir.path().join("assets/css/styles.css"), "body{}\n").unwrap();
        fs::write(dir.path().join("assets/logo.svg"), "<svg/>\n").unwrap();
        fs::write(dir.path().join("index.md"), "# Home\n").unwrap();

        let site = site_in(&dir);
        build(&site);

        let css = fs::read_to_string(site.output_dir.join("assets/css/styles.css")).unwrap();
        assert_eq!(css, "body{}\n");
        assert!(site.output_dir.join("assets/logo.svg").exists());
    }

    #[test]
    fn test_stale_output_assets_are_removed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/current.css"), "a{}\n").unwrap();
        fs::write(dir.path().join("index.md"), "# Home\n").unwrap();

        let site = site_in(&dir);

        // A previous build left an asset that no longer exists in source
        fs::create_dir_all(site.output_dir.join("assets")).unwrap();
        fs::write(site.output_dir.join("assets/stale.css"), "old{}\n").unwrap();

        build(&site);

        assert!(site.output_dir.join("assets/current.css").exists());
        assert!(!site.output_dir.join("assets/stale.css").exists());
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("index.md"),
            "---\ntitle: Home\n---\n\n# Hi\n\n```rust\nfn main() {}\n```\n",
        )
        .unwrap();

        let site = site_in(&dir);
        build(&site);
        let first = fs::read(site.output_dir.join("index.html")).unwrap();

        build(&site);
        let second = fs::read(site.output_dir.join("index.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_config_overrides_default_title() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Custom Site\n").unwrap();
        fs::write(dir.path().join("index.md"), "# Home\n").unwrap();

        let site = site_in(&dir);
        build(&site);

        let html = fs::read_to_string(site.output_dir.join("index.html")).unwrap();
        assert!(html.contains("<title>Custom Site</title>"));
    }
}
