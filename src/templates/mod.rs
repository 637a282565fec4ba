//! Page assembly: include fragments and the fixed HTML skeleton

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Header and footer fragments, loaded once per build and passed by value
/// into the pipeline
#[derive(Debug, Clone, Default)]
pub struct Fragments {
    pub header: String,
    pub footer: String,
}

impl Fragments {
    /// Load both fragments from the includes directory
    pub fn load(includes_dir: &Path) -> Result<Self> {
        Ok(Self {
            header: load_fragment(includes_dir, "header.html")?,
            footer: load_fragment(includes_dir, "footer.html")?,
        })
    }
}

/// Read a named fragment, returning an empty string when the file is
/// absent. Any other read failure propagates.
pub fn load_fragment(includes_dir: &Path, name: &str) -> Result<String> {
    let path = includes_dir.join(name);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => {
            Err(e).with_context(|| format!("failed to read include {}", path.display()))
        }
    }
}

/// Substitute title, fragments, and rendered body into the page skeleton.
///
/// Plain single-pass substitution. Title and body are inserted verbatim,
/// with no escaping beyond what the Markdown renderer already produced.
pub fn render_page(title: &str, content: &str, fragments: &Fragments) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <title>{title}</title>
  <link rel="icon" type="image/svg+xml" href="/assets/img/favicon.svg">
  <link rel="stylesheet" href="/assets/css/styles.css">
</head>
<body>
{header}
<main id="content" class="site-main container">{content}</main>
{footer}
</body>
</html>"#,
        title = title,
        header = fragments.header,
        content = content,
        footer = fragments.footer,
    )
}
