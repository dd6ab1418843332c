//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── Content::load() ──► gate + order products.csv / posts.csv
//!     │
//!     ├── reset_output() ──► wipe and recreate the output directory
//!     │
//!     ├── build_pages() ──► home, indexes, one detail page per record
//!     ├── build_sitemap() ──► sitemap.xml
//!     ├── build_rss() ──► rss.xml
//!     └── copy_assets() ──► assets/**
//! ```
//!
//! Every stage reads one [`BuildContext`], created per build and dropped
//! when the build ends. A failure stops the build where it happened; files
//! already written are left in place.

use crate::{
    assets::copy_assets,
    config::SiteConfig,
    content::Content,
    generator::{pages::build_pages, rss::build_rss, sitemap::build_sitemap},
    log,
    template::TemplateStore,
    utils::date,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::{fs, path::Path};

/// Name of the asset directory inside the output root
const ASSETS_DIR: &str = "assets";

/// Immutable state shared by every stage of one build.
pub struct BuildContext<'a> {
    pub config: &'a SiteConfig,
    pub content: Content,
    pub templates: TemplateStore,
    /// Build date: publish gate cut-off and sitemap `lastmod`
    pub today: NaiveDate,
}

impl<'a> BuildContext<'a> {
    pub fn new(config: &'a SiteConfig, content: Content, today: NaiveDate) -> Self {
        Self {
            config,
            content,
            templates: TemplateStore::new(&config.build.templates),
            today,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.site.base_url
    }

    pub fn output(&self) -> &Path {
        &self.config.build.output
    }
}

/// Counts reported after a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub products: usize,
    pub posts: usize,
    pub pages: usize,
}

/// Build the entire site as of today.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    build_site_at(config, date::today())
}

/// Build the entire site with an explicit build date.
pub fn build_site_at(config: &SiteConfig, today: NaiveDate) -> Result<BuildReport> {
    let content = Content::load(&config.build.data, today)?;
    let ctx = BuildContext::new(config, content, today);

    reset_output(ctx.output())?;

    let pages = build_pages(&ctx)?;
    if config.build.sitemap.enable {
        build_sitemap(&ctx)?;
    }
    if config.build.rss.enable {
        build_rss(&ctx)?;
    }
    copy_assets(&config.build.assets, &ctx.output().join(ASSETS_DIR))?;

    let report = BuildReport {
        products: ctx.content.products.len(),
        posts: ctx.content.posts.len(),
        pages,
    };
    log!(
        "build";
        "done: {} products, {} posts, {} pages",
        report.products,
        report.posts,
        report.pages
    );
    Ok(report)
}

/// Remove the output directory if present and recreate it empty.
fn reset_output(output: &Path) -> Result<()> {
    if output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}
