//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove the output directory if it exists
pub fn run(site: &Site) -> Result<()> {
    if site.output_dir.exists() {
        fs::remove_dir_all(&site.output_dir)?;
        tracing::info!("Deleted: {:?}", site.output_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(site.output_dir.join("assets")).unwrap();
        fs::write(site.output_dir.join("index.html"), "<html></html>").unwrap();

        run(&site).unwrap();
        assert!(!site.output_dir.exists());
    }

    #[test]
    fn test_clean_on_missing_output_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        assert!(run(&site).is_ok());
    }
}
