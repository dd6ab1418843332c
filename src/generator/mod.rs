//! Output generators.
//!
//! | Generator | Output |
//! |-----------|--------|
//! | [`pages`]   | `index.html`, `<section>/index.html`, `<section>/<slug>.html` |
//! | [`sitemap`] | `sitemap.xml` |
//! | [`rss`]     | `rss.xml` |
//!
//! All three read the same [`crate::build::BuildContext`] and derive detail
//! URLs through [`crate::content::ContentKind`].

pub mod pages;
pub mod rss;
pub mod sitemap;

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Write `bytes` to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
