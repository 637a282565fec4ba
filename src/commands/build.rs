//! Build the static site

use anyhow::Result;

use crate::content::MarkdownRenderer;
use crate::generator::Generator;
use crate::Site;

/// Build the site, setting up the Markdown renderer first
pub fn run(site: &Site) -> Result<()> {
    let renderer = MarkdownRenderer::new()?;
    run_with_renderer(site, &renderer)
}

/// Build the site with an already-probed renderer
pub fn run_with_renderer(site: &Site, renderer: &MarkdownRenderer) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site, renderer)?;
    let pages = generator.generate()?;

    let duration = start.elapsed();
    tracing::info!("Generated {} pages in {:.2}s", pages, duration.as_secs_f64());

    Ok(())
}
